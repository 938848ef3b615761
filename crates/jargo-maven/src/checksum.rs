//! Checksum side-files accompanying every published payload.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::io::Read;
use std::path::Path;

/// The four digests uploaded next to a payload, as lowercase hex strings.
#[derive(Debug, Clone)]
pub struct Checksums {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub sha512: String,
}

impl Checksums {
    /// Compute all four digests over an in-memory payload.
    pub fn of_bytes(data: &[u8]) -> Self {
        let mut md5 = Md5::new();
        let mut sha1 = Sha1::new();
        let mut sha256 = Sha256::new();
        let mut sha512 = Sha512::new();
        md5.update(data);
        sha1.update(data);
        sha256.update(data);
        sha512.update(data);
        Self {
            md5: format!("{:x}", md5.finalize()),
            sha1: format!("{:x}", sha1.finalize()),
            sha256: format!("{:x}", sha256.finalize()),
            sha512: format!("{:x}", sha512.finalize()),
        }
    }

    /// Compute all four digests of a file in a single streaming pass.
    pub fn of_file(path: &Path) -> std::io::Result<Self> {
        let mut file = std::fs::File::open(path)?;
        let mut md5 = Md5::new();
        let mut sha1 = Sha1::new();
        let mut sha256 = Sha256::new();
        let mut sha512 = Sha512::new();
        let mut buffer = [0u8; 8192];
        loop {
            let n = file.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            md5.update(&buffer[..n]);
            sha1.update(&buffer[..n]);
            sha256.update(&buffer[..n]);
            sha512.update(&buffer[..n]);
        }
        Ok(Self {
            md5: format!("{:x}", md5.finalize()),
            sha1: format!("{:x}", sha1.finalize()),
            sha256: format!("{:x}", sha256.finalize()),
            sha512: format!("{:x}", sha512.finalize()),
        })
    }

    /// `(file extension, digest)` pairs in upload order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("md5", self.md5.as_str()),
            ("sha1", self.sha1.as_str()),
            ("sha256", self.sha256.as_str()),
            ("sha512", self.sha512.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Digests of the ASCII string "jargo", from `md5sum`, `sha1sum`,
    // `sha256sum`, and `sha512sum`.
    const DATA: &[u8] = b"jargo";

    #[test]
    fn digests_of_bytes() {
        let checksums = Checksums::of_bytes(DATA);
        assert_eq!(checksums.md5, "8e64ca5fc8fe5fb8f3b3eb2a8b03c31f");
        assert_eq!(checksums.sha1, "ccefddc62e9306d415b3de27c1473621cb9591db");
        assert_eq!(
            checksums.sha256,
            "a6647aa6591336d534da25e1e55d999f1b0fb89387e30438bcf4dbd7ea54cdee"
        );
        assert_eq!(
            checksums.sha512,
            "95f52f2e9d11b9c9927514e27324d52d025da341f63d70f3f3b9a7f09f5b33c36066f7bb1bb69a298db2d8b9b9e57fc7ab584272ef2d7ab7db3588c60a55e3b7"
        );
    }

    #[test]
    fn file_digests_match_byte_digests() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("payload.bin");
        std::fs::write(&path, DATA).unwrap();

        let from_file = Checksums::of_file(&path).unwrap();
        let from_bytes = Checksums::of_bytes(DATA);
        assert_eq!(from_file.md5, from_bytes.md5);
        assert_eq!(from_file.sha1, from_bytes.sha1);
        assert_eq!(from_file.sha256, from_bytes.sha256);
        assert_eq!(from_file.sha512, from_bytes.sha512);
    }

    #[test]
    fn entries_are_in_upload_order() {
        let checksums = Checksums::of_bytes(DATA);
        let extensions: Vec<&str> = checksums.entries().iter().map(|(ext, _)| *ext).collect();
        assert_eq!(extensions, vec!["md5", "sha1", "sha256", "sha512"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Checksums::of_file(Path::new("/does/not/exist.jar")).is_err());
    }
}
