#![no_main]

use folio::resolve::{BoundaryPattern, resolve};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Boundary resolution over arbitrary bytes must never panic,
    // whatever the offset or region kind
    if data.len() < 3 {
        return;
    }
    let offset = u16::from_le_bytes([data[0], data[1]]) as usize;
    let pattern = if data[2] & 1 == 0 {
        BoundaryPattern::verse()
    } else {
        BoundaryPattern::prose()
    };
    let text = &data[3..];
    let unit = resolve(text, offset % (text.len() + 1), &pattern);
    assert!(unit.start <= unit.end);
    assert!(unit.end <= text.len());
});
