use crate::vocab::Vocab;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Builds a jumble: `count` distinct words are drawn at random from the
/// vocabulary, their letters concatenated and shuffled.
///
/// Every drawn word is therefore spellable from the jumble, so a game with
/// target `count` always has at least `count` findable words. `count` is
/// clamped to the vocabulary size. With `Some(seed)` the draw and shuffle
/// are deterministic, which callers use for reproducible games and tests.
pub fn jumbled(vocab: &Vocab, count: usize, seed: Option<u64>) -> String {
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let count = count.min(vocab.len());
    let chosen: Vec<&String> = vocab.as_list().choose_multiple(&mut rng, count).collect();

    let mut letters: Vec<char> = chosen.iter().flat_map(|word| word.chars()).collect();
    letters.shuffle(&mut rng);
    letters.into_iter().collect()
}
