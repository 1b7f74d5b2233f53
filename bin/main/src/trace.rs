//! # trace.rs
//!
//! Replays the reference flag sequence and renders every intermediate state.
//!
//! Two flags are set on an empty value, all three indices are probed, a
//! clear flag and a set flag are unset, and the indices are probed again.
//! Each write renders the new value as hex and each read renders the flag,
//! giving ten lines in call order.

use flags::FlagValue;
use io::{format_flag, format_value};
use log::info;
use timed::timed;

const PROBES: [i64; 3] = [5, 4, 1];

fn probe(value: &FlagValue, lines: &mut Vec<String>) {
    for index in PROBES {
        lines.push(format_flag(value.get_index(index)));
    }
}

#[timed(duration(printer = "info!"))]
pub fn run_trace() -> Vec<String> {
    let mut lines = Vec::with_capacity(10);
    let mut value = FlagValue::zero();

    value = value.set_index(5);
    lines.push(format_value(&value));
    value = value.set_index(4);
    lines.push(format_value(&value));

    probe(&value, &mut lines);

    value = value.unset_index(1);                                               /* Bit 1 is clear, value unchanged   */
    lines.push(format_value(&value));
    value = value.unset_index(5);
    lines.push(format_value(&value));

    probe(&value, &mut lines);

    log::debug!("trace finished at {}", format_value(&value));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::timeout;

    #[test]
    #[timeout(1000)]
    fn replays_reference_sequence() {
        let expected = [
            "0x20", "0x30",
            "true", "true", "false",
            "0x30", "0x10",
            "false", "true", "false",
        ];

        assert_eq!(run_trace(), expected);
    }
}
