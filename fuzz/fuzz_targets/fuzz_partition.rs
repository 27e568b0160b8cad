#![no_main]

use folio::corpus::{CorpusLayout, partition};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Partitioning rejects malformed corpora with an error, never a panic
    let _ = partition(data, &CorpusLayout::default());
});
