//! Keyspace enumeration for brute-force candidate search.
//!
//! A round searches every string of one fixed length over the alphabet.
//! The keyspace of size `ALPHABET_SIZE^len` is laid out as a dispatch grid
//! of at most [`LANE_COUNT`] dimensions; each grid coordinate decodes to a
//! distinct candidate and every candidate is reachable by exactly one
//! coordinate.

use std::fmt;

/// Ordered set of symbols candidates are built from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: u64 = 26;

/// Maximum number of dispatch dimensions.
pub const LANE_COUNT: usize = 3;

/// Longest candidate length whose keyspace still fits in a `u64`.
pub const MAX_SUPPORTED_LEN: usize = 13;

/// Dimension sizes of one round's dispatch grid.
///
/// Character position `p` is assigned to lane `p % LANE_COUNT`; a lane's
/// size is `ALPHABET_SIZE^m` where `m` is the number of positions assigned
/// to it. The product of all dimensions is exactly the keyspace size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchShape {
    dims: Vec<u64>,
}

impl DispatchShape {
    /// Build the shape for candidates of the given length.
    pub fn for_length(len: usize) -> Self {
        assert!(
            (1..=MAX_SUPPORTED_LEN).contains(&len),
            "candidate length {} outside supported range 1..={}",
            len,
            MAX_SUPPORTED_LEN
        );

        let mut dims = Vec::with_capacity(LANE_COUNT);
        for p in 0..len {
            if p < LANE_COUNT {
                dims.push(ALPHABET_SIZE);
            } else {
                dims[p % LANE_COUNT] *= ALPHABET_SIZE;
            }
        }
        Self { dims }
    }

    /// Dimension sizes, lane 0 first.
    pub fn dims(&self) -> &[u64] {
        &self.dims
    }

    /// Total number of grid coordinates; equals the keyspace size.
    pub fn product(&self) -> u64 {
        self.dims.iter().product()
    }
}

impl fmt::Display for DispatchShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dim)?;
        }
        write!(f, "]")
    }
}

/// Bijective mapping between dispatch coordinates and candidates of one
/// fixed length.
#[derive(Debug, Clone)]
pub struct CandidateSpace {
    len: usize,
    shape: DispatchShape,
}

impl CandidateSpace {
    /// Create the space for candidates of the given length.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            shape: DispatchShape::for_length(len),
        }
    }

    /// Candidate length covered by this space.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Dispatch shape for this space's round.
    pub fn shape(&self) -> &DispatchShape {
        &self.shape
    }

    /// Number of candidates of this length; `ALPHABET_SIZE^len`.
    pub fn keyspace(&self) -> u64 {
        self.shape.product()
    }

    /// Split a linear grid index into one coordinate per dimension.
    ///
    /// Row-major over the shape with lane 0 varying fastest. Lanes beyond
    /// the shape's dimension count stay zero.
    pub fn coordinate_of(&self, index: u64) -> [u64; LANE_COUNT] {
        debug_assert!(index < self.keyspace());

        let mut coord = [0u64; LANE_COUNT];
        let mut rest = index;
        for (lane, &dim) in self.shape.dims().iter().enumerate() {
            coord[lane] = rest % dim;
            rest /= dim;
        }
        coord
    }

    /// Decode a coordinate into candidate bytes.
    ///
    /// Position `p` is digit `p / LANE_COUNT` of lane `p % LANE_COUNT`,
    /// least significant digit first. `out` must hold at least `len` bytes;
    /// only the first `len` are written.
    pub fn decode(&self, coord: &[u64; LANE_COUNT], out: &mut [u8]) {
        debug_assert!(out.len() >= self.len);

        let mut lanes = *coord;
        for (p, slot) in out.iter_mut().enumerate().take(self.len) {
            let lane = p % LANE_COUNT;
            *slot = ALPHABET[(lanes[lane] % ALPHABET_SIZE) as usize];
            lanes[lane] /= ALPHABET_SIZE;
        }
    }

    /// Decode the candidate at a linear grid index.
    pub fn candidate_at(&self, index: u64, out: &mut [u8]) {
        let coord = self.coordinate_of(index);
        self.decode(&coord, out);
    }
}
