//! Fuzz target for block formatting.

#![no_main]

use arbitrary::Arbitrary;
use bank_widget::format::format_in_blocks;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    block_size: u8,
}

fuzz_target!(|input: Input<'_>| {
    let block_size = usize::from(input.block_size.max(1));
    let formatted = format_in_blocks(input.text, block_size);

    if input.text.chars().count() <= block_size {
        assert_eq!(formatted, input.text);
    }
    if !input.text.contains(' ') {
        assert_eq!(formatted.replace(' ', ""), input.text);
    }
});
