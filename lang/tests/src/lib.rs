pub mod utils {
    use blog_lexer::{TokenKind, tokenize};

    /// `(kind, text)` pairs for every token of `source`, after checking
    /// that the tokens tile the input exactly.
    pub fn kinds_and_texts(source: &str) -> Vec<(TokenKind, &str)> {
        let stream = tokenize(source);
        let mut pos = 0;
        for tok in &stream {
            assert_eq!(tok.start, pos, "gap or overlap before {tok}");
            assert!(tok.end > tok.start, "empty token {tok}");
            pos = tok.end;
        }
        assert_eq!(pos, source.len(), "scan stopped early in {source:?}");
        stream.iter().map(|tok| (tok.kind, tok.text)).collect()
    }

    /// Only the non-trivia tokens.
    pub fn significant(source: &str) -> Vec<(TokenKind, &str)> {
        kinds_and_texts(source).into_iter().filter(|(kind, _)| !kind.is_trivia()).collect()
    }
}

/// Programs from the original BLOG lexer harness, plus a longer model.
pub const SAMPLES: &[&str] = &[
    "type Person;",
    "distinct Person Alice, Bob, P[100];",
    "random Real x ~ Gaussian(0, 1);\nrandom Real y ~ Gaussian(x, 1);",
    "random type0 funcname(type1 x) =expression;\nrandom type0 funcname(type1 x) dependency-expression;",
    "random NaturalNum x ~ Poisson(a);",
    "param Real a: 0 < a & a < 10 ;",
    "random Real funcname(type1 x);",
    "1.0 + 2.0 * 3.0 - 4.0",
    "Twice( 10.0 ) * 5.5",
    "fixed NaturalNum[] c = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];",
    "fixed NaturalNum[][] table = [1, 2, 3; 4, 5, 6];",
    "fixed List<NaturalNum> a = List(1, 2, 3, 4, 5, 6);",
    "fixed Map<Boolean, Real> map1 = {true -> 0.3, false -> 0.7};",
    "Categorical<Boolean> cpd1 =Categorical({true -> 0.3, false -> 0.7});",
    "List",
    BURGLARY,
];

pub const BURGLARY: &str = r#"/* The burglary network. */
type House;
distinct House Maryland, Ohio;

random Boolean Burglary(House h) ~ BooleanDistrib(0.003);
random Boolean Earthquake ~ BooleanDistrib(0.002);
random Boolean Alarm(House h) ~
  if Burglary(h) then
    if Earthquake then BooleanDistrib(0.95) else BooleanDistrib(0.94)
  else
    if Earthquake then BooleanDistrib(0.29) else BooleanDistrib(0.001);

// evidence
obs Alarm(Maryland) = true;
query Burglary(Maryland);
query exists House h Burglary(h) != null;
fixed String label = "house \"A\"";
"#;
