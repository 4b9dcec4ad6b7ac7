use flate2::Crc;
use std::fmt;

/// Identifies a raw input by its byte length and CRC-32 checksum.
///
/// Used as the key of the `AnalysisCache`, so identical uploads are only
/// parsed and classified once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentFingerprint {
    byte_length: u64,
    checksum: u32,
}

impl ContentFingerprint {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut crc = Crc::new();
        crc.update(bytes);

        Self {
            byte_length: bytes.len() as u64,
            checksum: crc.sum(),
        }
    }

    pub fn byte_length(&self) -> u64 {
        self.byte_length
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}-{}", self.checksum, self.byte_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_content_matches() {
        let a = ContentFingerprint::from_bytes(b"Text,Date\nhello,2023-01-01\n");
        let b = ContentFingerprint::from_bytes(b"Text,Date\nhello,2023-01-01\n");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_content_differs() {
        let a = ContentFingerprint::from_bytes(b"Text,Date\nhello,2023-01-01\n");
        let b = ContentFingerprint::from_bytes(b"Text,Date\nhello,2023-01-02\n");
        assert_ne!(a, b);
        assert_eq!(a.byte_length(), b.byte_length());
    }

    #[test]
    fn test_display() {
        let fingerprint = ContentFingerprint::from_bytes(b"");
        assert_eq!(fingerprint.to_string(), "00000000-0");
    }
}
