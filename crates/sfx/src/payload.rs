//! Resources embedded by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/payload.rs"));
