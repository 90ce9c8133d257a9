//! Embedded word list
//!
//! The Russian five-letter dictionary compiled into the binary at build time.

// Include the generated list from the build script
include!(concat!(env!("OUT_DIR"), "/words_ru.rs"));
