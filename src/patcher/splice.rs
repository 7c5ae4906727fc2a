use crate::patcher::types::{LineSequence, Payload, PatchError};

/// Split text into lines, keeping `\n` / `\r\n` on each one.
/// A final line without a terminator is kept as is.
pub fn split_lines(text: &str) -> LineSequence {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

/// Insert the payload before the element at `index`.
/// `index == len` appends; anything past that is rejected and `lines` is left alone.
pub fn insert_payload(
    lines: &mut LineSequence,
    index: usize,
    payload: &Payload,
) -> Result<(), PatchError> {
    if index > lines.len() {
        return Err(PatchError::IndexOutOfRange {
            index,
            len: lines.len(),
        });
    }
    lines.insert(index, payload.as_str().to_owned());
    Ok(())
}

pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: Payload = Payload::new("<div>\n  <p>hi</p>\n</div>\n");

    #[test]
    fn split_keeps_terminators() {
        let lines = split_lines("a\nb\r\nc");
        assert_eq!(lines, vec!["a\n", "b\r\n", "c"]);
        assert_eq!(join_lines(&lines), "a\nb\r\nc");
    }

    #[test]
    fn split_empty_is_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn insert_shifts_following_lines() {
        let mut lines = split_lines("zero\none\ntwo\n");
        insert_payload(&mut lines, 1, &BLOCK).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "zero\n");
        assert_eq!(lines[1], BLOCK.as_str());
        assert_eq!(lines[2], "one\n");
    }

    #[test]
    fn insert_at_len_appends() {
        let mut lines = split_lines("zero\none\n");
        insert_payload(&mut lines, 2, &BLOCK).unwrap();
        assert_eq!(lines.last().map(String::as_str), Some(BLOCK.as_str()));
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut lines = split_lines("zero\n");
        let err = insert_payload(&mut lines, 5, &BLOCK).unwrap_err();
        assert!(matches!(
            err,
            PatchError::IndexOutOfRange { index: 5, len: 1 }
        ));
        assert_eq!(lines, vec!["zero\n"]);
    }
}
