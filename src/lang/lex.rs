use super::{token::*, LineNumber};

pub fn lex(s: &str) -> (LineNumber, Vec<Token>) {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_basic_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        debug_assert!(!s.is_empty(), "Failed to tokenize number.");
        Some(Token::Literal(s))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_alphabetic(*pk) && !is_basic_digit(*pk) {
                break;
            }
            s.push(pk.to_ascii_uppercase());
            self.chars().next();
        }
        debug_assert!(!s.is_empty(), "Failed to tokenize alphabetic.");
        match Token::from_string(&s) {
            Some(token) => Some(token),
            None => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let s = ch.to_string();
        match Token::from_string(&s) {
            Some(t) => Some(t),
            None => Some(Token::Unknown(s)),
        }
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if is_basic_whitespace(*pk) {
            return self.whitespace();
        }
        if self.remark {
            return Some(Token::Unknown(self.chars.by_ref().collect::<String>()));
        }
        if is_basic_digit(*pk) {
            return self.number();
        }
        if is_basic_alphabetic(*pk) {
            let r = self.alphabetic();
            if let Some(Token::Word(Word::Rem)) = r {
                self.remark = true;
            }
            return r;
        }
        self.minutia()
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> (LineNumber, Vec<Token>) {
        let s = s.trim_end_matches(|c: char| c == '\r' || c == '\n');
        let mut line_number = None;
        let mut s = s.trim_start_matches(is_basic_whitespace);
        let digits = s.find(|c: char| !is_basic_digit(c)).unwrap_or_else(|| s.len());
        if digits > 0 {
            if let Ok(n) = s[..digits].parse::<u32>() {
                line_number = Some(n);
                s = s[digits..].trim_start_matches(is_basic_whitespace);
            }
        }
        let mut tokens = BasicLexer {
            chars: s.chars().peekable(),
            remark: false,
        }
        .collect();
        BasicLexer::trim_end(&mut tokens);
        (line_number, tokens)
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
        if let Some(Token::Unknown(_)) = tokens.last() {
            if let Some(Token::Unknown(s)) = tokens.pop() {
                let s = s.trim_end();
                if !s.is_empty() {
                    tokens.push(Token::Unknown(s.to_string()));
                }
            }
        }
    }
}
