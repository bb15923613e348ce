use basic::lang::{lex, token::*, Line};

#[test]
fn test_let() {
    let (ln, v) = lex("10 let x=5");
    assert_eq!(ln, Some(10));
    assert_eq!(
        v,
        vec![
            Token::Word(Word::Let),
            Token::Whitespace(1),
            Token::Ident("X".to_string()),
            Token::Operator(Operator::Equal),
            Token::Literal("5".to_string()),
        ]
    );
}

#[test]
fn test_parens() {
    let (ln, v) = lex("print(a)");
    assert_eq!(ln, None);
    assert_eq!(
        v,
        vec![
            Token::Word(Word::Print),
            Token::LParen,
            Token::Ident("A".to_string()),
            Token::RParen,
        ]
    );
}

#[test]
fn test_comparisons_are_single_characters() {
    let (_, v) = lex("1<>2");
    let mut x = v.iter();
    assert_eq!(x.next(), Some(&Token::Literal("1".to_string())));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::Less)));
    assert_eq!(x.next(), Some(&Token::Operator(Operator::Greater)));
    assert_eq!(x.next(), Some(&Token::Literal("2".to_string())));
    assert_eq!(x.next(), None);
}

#[test]
fn test_unknown() {
    let (_, v) = lex("10 PRINT #");
    assert_eq!(v.last(), Some(&Token::Unknown("#".to_string())));
}

#[test]
fn test_identifier_with_digits() {
    let (_, v) = lex("A1B2");
    assert_eq!(v, vec![Token::Ident("A1B2".to_string())]);
}

#[test]
fn test_line_display() {
    assert_eq!(Line::new("10   let   x=5  \r\n").to_string(), "10 LET   X=5");
    assert_eq!(Line::new("print 1").to_string(), "PRINT 1");
}
