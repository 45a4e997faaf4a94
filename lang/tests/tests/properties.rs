use blog_lexer::{Lexer, RuleTable, TokenKind, tokenize};
use blog_tests::SAMPLES;
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Characters that exercise every rule and the boundaries between them.
const ALPHABET: &[char] = &[
    'a', 'f', 'i', 'x', 'L', 'R', '_', '0', '1', '9', '.', '"', '\\', '/', '*', '(', ')', ',',
    ';', '<', '=', '>', '-', '!', '~', '#', ' ', '\t', '\n', '@', '$', 'é', '∀',
];

/// Fragments that glue into realistic-looking programs.
const FRAGMENTS: &[&str] = &[
    "random", "Real", "Listing", "if", "ifx", "Gaussian(", "1.0", "10", "1.0.0", "\"s\\\"t\"",
    "\"open", "// c\n", "/* b */", "/* open", "->", "<=", "true", "null", " ", "\n", "@", ";",
];

fn random_source(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..64);
    (0..len).map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())]).collect()
}

fn random_program(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..24);
    (0..len).map(|_| FRAGMENTS[rng.random_range(0..FRAGMENTS.len())]).collect()
}

fn check_invariants(source: &str) {
    let stream = tokenize(source);
    assert_eq!(stream.reconstruct(), source);
    let mut pos = 0;
    for tok in &stream {
        assert_eq!(tok.start, pos, "in {source:?}");
        assert!(tok.end > tok.start, "in {source:?}");
        if tok.kind == TokenKind::Error {
            assert_eq!(tok.text.chars().count(), 1, "in {source:?}");
        }
        pos = tok.end;
    }
    assert_eq!(pos, source.len());
    assert_eq!(tokenize(source), stream, "rescan differs for {source:?}");
}

#[test]
fn random_characters_reconstruct() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..2000 {
        check_invariants(&random_source(&mut rng));
    }
}

#[test]
fn random_fragments_reconstruct() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        check_invariants(&random_program(&mut rng));
    }
}

#[test]
fn error_count_matches_stray_characters() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.random_range(0..10);
        let source: String = (0..n).map(|_| "x @ ").collect();
        assert_eq!(tokenize(&source).errors().len(), n);
    }
}

#[test]
fn parallel_scans_agree() {
    let inputs: Vec<&str> = SAMPLES.iter().copied().cycle().take(SAMPLES.len() * 16).collect();
    let sequential: Vec<_> = inputs.iter().map(|src| tokenize(src).into_tokens()).collect();
    let parallel: Vec<_> = inputs
        .par_iter()
        .map(|src| Lexer::with_rules(RuleTable::standard(), src).collect::<Vec<_>>())
        .collect();
    assert_eq!(parallel, sequential);
}

/// Large inputs shaped so that some rule reads far past the cursor, with
/// the kind and number of tokens each one must produce.
fn long_shapes() -> Vec<(&'static str, String, TokenKind, usize)> {
    use TokenKind::*;
    vec![
        ("glued type names", "List".repeat(50_000), TypeName, 50_000),
        ("identifier without a call", format!("f{}", "o".repeat(200_000)), Identifier, 1),
        ("unterminated strings", "\"open\n".repeat(30_000), StringLiteral, 30_000),
        ("unclosed comment openers", "/* ".repeat(100_000), BlockComment, 1),
        ("empty line comments", "//\n".repeat(60_000), LineComment, 60_000),
    ]
}

#[test]
fn long_inputs_measure_each_word_once() {
    for (shape, source, kind, count) in long_shapes() {
        let mut lexer = Lexer::new(&source);
        let tokens: Vec<_> = lexer.by_ref().collect();
        assert!(lexer.context().measured() <= source.len(), "{shape}: a word was measured twice");
        assert_eq!(tokens.iter().filter(|tok| tok.kind == kind).count(), count, "{shape}");
        assert_eq!(tokens.last().map(|tok| tok.end), Some(source.len()), "{shape}");
        assert!(tokens.windows(2).all(|w| w[0].end == w[1].start), "{shape}: tokens leave a gap");
    }
}

#[test]
fn glued_type_names_then_call() {
    let source = format!("{}x ~ {}(1);", "Real".repeat(30_000), "Map".repeat(30_000));
    let stream = tokenize(&source);
    assert_eq!(stream.reconstruct(), source);
    let kinds = stream.kinds();
    assert_eq!(kinds.iter().filter(|&&kind| kind == TokenKind::TypeName).count(), 30_000);
    assert_eq!(kinds[30_000], TokenKind::Identifier);
    let call = stream.iter().find(|tok| tok.kind == TokenKind::FunctionName).unwrap();
    assert_eq!(call.len(), 3 * 30_000);
}
