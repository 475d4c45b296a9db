//! MD5 implementation of the digest contract.

use md5::{Digest, Md5};

use crate::kernel::DigestKernel;

/// MD5 digest kernel; 16-byte output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Kernel;

impl DigestKernel for Md5Kernel {
    fn digest_len(&self) -> usize {
        <Md5 as Digest>::output_size()
    }

    fn digest(&self, data: &[u8], out: &mut [u8]) {
        out.copy_from_slice(&Md5::digest(data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_hex(data: &[u8]) -> String {
        let kernel = Md5Kernel;
        let mut out = vec![0u8; kernel.digest_len()];
        kernel.digest(data, &mut out);
        hex::encode(out)
    }

    #[test]
    fn test_digest_len_is_sixteen() {
        assert_eq!(Md5Kernel.digest_len(), 16);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(digest_hex(b"a"), "0cc175b9c0f1b6a831c399e269772661");
        assert_eq!(digest_hex(b"ab"), "187ef4436122d1cc2f40dc2b92f0eba0");
        assert_eq!(digest_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    }
}
