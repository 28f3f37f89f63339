// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#![cfg(feature = "std")]

#[cfg(test)]
mod hash_reader_tests {
    use std::io::{self, Cursor, ErrorKind, Read};

    use redoubt_sha256::{hash_reader, sha256};

    /// Reader that hands out at most `max_read` bytes per call and injects
    /// one error after `fail_after` bytes.
    struct FlakyReader {
        data: Vec<u8>,
        pos: usize,
        max_read: usize,
        fail_after: Option<usize>,
        fail_kind: ErrorKind,
    }

    impl FlakyReader {
        fn new(data: Vec<u8>, max_read: usize) -> Self {
            Self {
                data,
                pos: 0,
                max_read,
                fail_after: None,
                fail_kind: ErrorKind::Other,
            }
        }

        fn failing_at(mut self, offset: usize, kind: ErrorKind) -> Self {
            self.fail_after = Some(offset);
            self.fail_kind = kind;
            self
        }
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.fail_after.is_some_and(|offset| self.pos >= offset) {
                self.fail_after = None;
                return Err(io::Error::new(self.fail_kind, "injected failure"));
            }

            let n = buf.len().min(self.max_read).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    fn message(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 + 3) as u8).collect()
    }

    #[test]
    fn test_cursor_matches_one_shot() {
        let data = message(100_000);

        let digest = hash_reader(Cursor::new(&data)).expect("Failed to hash_reader(..)");

        assert_eq!(digest, sha256(&data));
    }

    #[test]
    fn test_short_reads_match_one_shot() {
        let data = message(5_000);

        for max_read in [1, 63, 64, 65, 1000] {
            let reader = FlakyReader::new(data.clone(), max_read);
            let digest = hash_reader(reader).expect("Failed to hash_reader(..)");

            assert_eq!(digest, sha256(&data), "max_read={max_read}");
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let data = message(3_000);
        let reader = FlakyReader::new(data.clone(), 512).failing_at(1024, ErrorKind::Interrupted);

        let digest = hash_reader(reader).expect("Interrupted must be retried");

        assert_eq!(digest, sha256(&data));
    }

    #[test]
    fn test_read_error_aborts() {
        let reader = FlakyReader::new(message(3_000), 512).failing_at(1024, ErrorKind::BrokenPipe);

        let err = hash_reader(reader).expect_err("hash_reader(..) should fail");

        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_reader_is_not_consumed_past_eof() {
        let data = b"abc".to_vec();
        let mut cursor = Cursor::new(data);

        let digest = hash_reader(&mut cursor).expect("Failed to hash_reader(..)");

        assert_eq!(
            digest.to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        // Still usable afterwards: the stream was borrowed, not closed
        assert_eq!(cursor.position(), 3);
    }
}
