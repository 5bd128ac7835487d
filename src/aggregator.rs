// Merkle aggregation over leaf digests: root construction and inclusion proofs

use alloy_primitives::{B256, keccak256};

use crate::error::CompositeError;
use crate::types::MerkleProof;

/// Combines two digests into their parent digest.
///
/// The pair is sorted by raw byte comparison before hashing:
/// `keccak256(min(a, b) || max(a, b))`. Sorting makes the combine rule
/// independent of which sibling sat on the left, so proof verification never
/// needs left/right position flags. The on-chain verifier applies the same
/// rule; both sides must keep it byte-identical.
#[must_use]
pub fn combine(a: B256, b: B256) -> B256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo.as_slice());
    buf[32..].copy_from_slice(hi.as_slice());
    keccak256(buf)
}

/// Builds the parent level from one tree level.
///
/// Adjacent pairs combine; an odd trailing digest is carried up unchanged.
fn next_level(level: &[B256]) -> Vec<B256> {
    let mut parents = Vec::with_capacity(level.len().div_ceil(2));
    let mut pairs = level.chunks_exact(2);
    for pair in &mut pairs {
        parents.push(combine(pair[0], pair[1]));
    }
    if let [lone] = pairs.remainder() {
        parents.push(*lone);
    }
    parents
}

/// Builds every level below the root, leaves first.
///
/// Levels are flat digest arrays; the tree is discarded once roots and proofs
/// are extracted. The returned vector is empty for a single leaf.
fn build_levels(leaves: &[B256]) -> Vec<Vec<B256>> {
    let mut levels = Vec::new();
    let mut current = leaves.to_vec();
    while current.len() > 1 {
        let parents = next_level(&current);
        levels.push(current);
        current = parents;
    }
    levels
}

/// Computes the Merkle root over an ordered, non-empty list of leaves.
///
/// Leaf order is positional and caller-preserved: only sibling pairs are
/// sorted, the leaf list itself is not. A single leaf is its own root.
///
/// # Errors
///
/// Returns [`CompositeError::EmptyMessageList`] for an empty leaf list.
///
/// # Examples
///
/// ```
/// use alloy_primitives::keccak256;
/// use composite_eip712::aggregator::build_root;
///
/// let leaves = vec![keccak256(b"a"), keccak256(b"b")];
/// let root = build_root(&leaves).expect("non-empty batch");
/// assert_ne!(root, leaves[0]);
/// ```
pub fn build_root(leaves: &[B256]) -> Result<B256, CompositeError> {
    let mut current = match leaves {
        [] => return Err(CompositeError::EmptyMessageList),
        _ => leaves.to_vec(),
    };
    while current.len() > 1 {
        current = next_level(&current);
    }
    Ok(current[0])
}

/// Builds the inclusion proof for the leaf at `index`.
///
/// The proof holds the sibling digest at each level, leaf to root. A level
/// where the tracked node is the unpaired carry-over contributes no element,
/// so proofs in the same tree can have different lengths.
///
/// # Errors
///
/// Returns [`CompositeError::EmptyMessageList`] for an empty leaf list and
/// [`CompositeError::LeafIndexOutOfRange`] when `index >= leaves.len()`.
pub fn build_proof(leaves: &[B256], index: usize) -> Result<MerkleProof, CompositeError> {
    if leaves.is_empty() {
        return Err(CompositeError::EmptyMessageList);
    }
    if index >= leaves.len() {
        return Err(CompositeError::LeafIndexOutOfRange {
            index,
            leaf_count: leaves.len(),
        });
    }
    Ok(proof_from_levels(&build_levels(leaves), index))
}

/// Builds one inclusion proof per leaf, index-aligned with the input.
///
/// Shares a single level-array pass across all proofs, so signing a batch of
/// `n` messages walks the tree once instead of `n` times.
///
/// # Errors
///
/// Returns [`CompositeError::EmptyMessageList`] for an empty leaf list.
pub fn build_proofs(leaves: &[B256]) -> Result<Vec<MerkleProof>, CompositeError> {
    if leaves.is_empty() {
        return Err(CompositeError::EmptyMessageList);
    }
    let levels = build_levels(leaves);
    Ok((0..leaves.len())
        .map(|index| proof_from_levels(&levels, index))
        .collect())
}

fn proof_from_levels(levels: &[Vec<B256>], index: usize) -> MerkleProof {
    let mut proof = MerkleProof::new();
    let mut position = index;
    for level in levels {
        let sibling = position ^ 1;
        if sibling < level.len() {
            proof.push(level[sibling]);
        }
        position /= 2;
    }
    proof
}

/// Recomputes a root from a leaf and its proof.
///
/// Folds [`combine`] over the proof elements starting at the leaf. This is
/// the verification-side counterpart of [`build_root`]: for every leaf index,
/// folding that leaf with its [`build_proof`] output yields the same digest
/// `build_root` produced. An empty proof returns the leaf unchanged.
#[must_use]
pub fn compute_root(leaf: B256, proof: &[B256]) -> B256 {
    proof
        .iter()
        .fold(leaf, |acc, sibling| combine(acc, *sibling))
}
