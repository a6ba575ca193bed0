/// Dimensionality of the hashed bag-of-words pseudo-embedding
pub const EMBEDDING_DIM: usize = 128;

/// Map text to a fixed-length unit vector without an external embedding
/// service.
///
/// Lower-cases the text, splits on whitespace, and accumulates a `1/(i+1)`
/// weight for the token at position `i` into the bucket its hash selects, so
/// words near the start of an entry dominate the direction (diary openings
/// usually state the main topic). The result is L2-normalized; token-less
/// input stays the all-zero vector.
pub fn embed(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0f32; EMBEDDING_DIM];

    let lowered = text.to_lowercase();
    for (idx, token) in lowered.split_whitespace().enumerate() {
        let bucket = hash_token(token) as usize % EMBEDDING_DIM;
        vector[bucket] += 1.0 / (idx as f32 + 1.0);
    }

    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in &mut vector {
            *v /= norm;
        }
    }

    vector
}

/// Cosine similarity between two embeddings.
///
/// Mismatched lengths score 0.0 instead of erroring, so ranking degrades
/// gracefully when a stored vector predates a dimension change. Inputs are
/// unit vectors from `embed`, so the dot product alone is the cosine.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Signed 32-bit polynomial rolling hash (`h = h*31 + char`), wrapped and
/// folded to non-negative. Stable across runs; collisions only cost ranking
/// precision.
fn hash_token(token: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in token.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}
