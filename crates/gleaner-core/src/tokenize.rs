//! Word tokenizers
//!
//! [`tokenize`] follows toktok: punctuation is padded with spaces according to
//! a fixed set of rules and the result is split on whitespace. Periods are only
//! split off at the very end of the text, so abbreviations like `Dr.` and
//! `U.S.` stay whole. Every apostrophe becomes its own token (`don ' t`).
//!
//! [`word_tokenize`] is Treebank-style: apostrophes inside words are kept and
//! English contractions are split (`don't` -> `do n't`).

/// Clitics split off the end of a word by [`word_tokenize`]
const CLITICS: &[&str] = &["'s", "'m", "'d", "'re", "'ve", "'ll"];

/// Closing quotes allowed between the final period and the end of the text
const CLOSING_QUOTES: &[char] = &['"', '\'', '’', '»', '›', '”'];

/// Split text into words and punctuation tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let final_period = final_period_index(&chars);
    let mut padded = String::with_capacity(text.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if matches!(c, '.' | ',' | '-') {
            let run = run_length(&chars, i);
            if run > 1 {
                pad(&mut padded, &chars[i..i + run]);
                i += run;
                continue;
            }
        }

        let next = chars.get(i + 1).copied();
        let split = match c {
            ',' => !next.is_some_and(|n| n.is_ascii_digit()),
            '.' => final_period == Some(i),
            '?' => next.is_none_or(char::is_whitespace),
            ':' => !(next == Some('/') && chars.get(i + 2) == Some(&'/')),
            c => always_padded(c),
        };

        if split {
            pad(&mut padded, &chars[i..=i]);
        } else {
            padded.push(c);
        }
        i += 1;
    }

    padded.split_whitespace().map(String::from).collect()
}

/// Treebank-style tokenization with contraction splitting
pub fn word_tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let final_period = final_period_index(&chars);
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            flush(&mut current, &mut tokens);
            i += 1;
            continue;
        }

        if matches!(c, '.' | '-') {
            let run = run_length(&chars, i);
            if run > 1 {
                flush(&mut current, &mut tokens);
                tokens.push(chars[i..i + run].iter().collect());
                i += run;
                continue;
            }
        }

        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        let inner = match c {
            c if c.is_alphanumeric() => true,
            '.' => final_period != Some(i),
            '-' | '/' | '*' | '+' | '=' | '_' | '^' | '~' => true,
            ',' | ':' => next.is_some_and(|n| n.is_ascii_digit()),
            '\'' => prev.is_some_and(char::is_alphanumeric) && next.is_some_and(char::is_alphabetic),
            _ => false,
        };

        if inner {
            current.push(c);
        } else {
            flush(&mut current, &mut tokens);
            tokens.push(c.to_string());
        }
        i += 1;
    }
    flush(&mut current, &mut tokens);

    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        split_contraction(token, &mut out);
    }
    out
}

/// Index of the period that ends the text, if any. Trailing whitespace and one
/// closing quote may follow it; a period that is part of a `..` run never counts.
fn final_period_index(chars: &[char]) -> Option<usize> {
    let mut end = chars.len();
    while end > 0 && chars[end - 1].is_whitespace() {
        end -= 1;
    }
    if end > 0 && CLOSING_QUOTES.contains(&chars[end - 1]) {
        end -= 1;
        while end > 0 && chars[end - 1].is_whitespace() {
            end -= 1;
        }
    }

    let at = end.checked_sub(1)?;
    let lone = chars[at] == '.' && (at == 0 || chars[at - 1] != '.');
    lone.then_some(at)
}

fn always_padded(c: char) -> bool {
    matches!(
        c,
        '!' | '"' | ';' | '¿' | '¡' | '%' | '°' | '±' | '©' | '®' | '…' | '&' | '|'
            | '(' | ')' | '[' | ']' | '{' | '}' | '«' | '»' | '‹' | '›' | '“' | '”' | '‘' | '„'
            | '‚' | '「' | '」' | '『' | '』' | '\'' | '’' | '`' | '–' | '—'
            | '$' | '¢' | '£' | '¤' | '¥' | '\u{20A0}'..='\u{20BF}'
    )
}

fn run_length(chars: &[char], start: usize) -> usize {
    chars[start..].iter().take_while(|&&c| c == chars[start]).count()
}

fn pad(out: &mut String, symbol: &[char]) {
    out.push(' ');
    out.extend(symbol);
    out.push(' ');
}

fn flush(current: &mut String, out: &mut Vec<String>) {
    if !current.is_empty() {
        out.push(std::mem::take(current));
    }
}

fn split_contraction(token: String, out: &mut Vec<String>) {
    if !token.contains('\'') || token == "'" {
        out.push(token);
        return;
    }

    let lower = token.to_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let at = token.len() - 3;
        out.push(token[..at].to_string());
        out.push(token[at..].to_string());
        return;
    }

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let at = token.len() - clitic.len();
            out.push(token[..at].to_string());
            out.push(token[at..].to_string());
            return;
        }
    }

    out.push(token);
}
