// WHY: Context-sensitive rewrites the regex engine cannot express (lookaround, back-references)
// Every pass inspects the string as it was before the pass started, like a regex substitution

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

#[inline]
fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// `y` directly after `x` becomes `i` (acyclovir keeps its `sayk`, xylo- becomes `si`)
pub fn y_after_x(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut prev = None;
    for ch in input.chars() {
        if ch == 'y' && prev == Some('x') {
            output.push('i');
        } else {
            output.push(ch);
        }
        prev = Some(ch);
    }
    output
}

/// `y` directly before `s` becomes `i`
pub fn y_before_s(input: &str) -> String {
    y_before(input, 's')
}

/// `y` directly before `l` becomes `i` (acetylcysteine -> asetil...)
pub fn y_before_l(input: &str) -> String {
    y_before(input, 'l')
}

fn y_before(input: &str, follower: char) -> String {
    let chars: Vec<char> = input.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            if ch == 'y' && chars.get(i + 1) == Some(&follower) {
                'i'
            } else {
                ch
            }
        })
        .collect()
}

/// Any `y` not preceded by `a` becomes `i`
pub fn y_without_a(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut prev = None;
    for ch in input.chars() {
        if ch == 'y' && prev != Some('a') {
            output.push('i');
        } else {
            output.push(ch);
        }
        prev = Some(ch);
    }
    output
}

/// Collapse an immediately repeated non-digit character to one occurrence.
/// Pairs are consumed left to right without overlap, so `aaa` becomes `aa`.
pub fn collapse_doubles(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        output.push(ch);
        if !ch.is_numeric() && chars.get(i + 1) == Some(&ch) {
            i += 2;
        } else {
            i += 1;
        }
    }
    output
}

/// `o` + vowel gets a `y` glide unless a third vowel follows (`oa` -> `oya`, `oai` untouched)
pub fn o_vowel_glide(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        match chars.get(i + 1) {
            Some(&next)
                if ch == 'o'
                    && is_vowel(next)
                    && !chars.get(i + 2).is_some_and(|&c| is_vowel(c)) =>
            {
                output.push('o');
                output.push('y');
                output.push(next);
                i += 2;
            }
            _ => {
                output.push(ch);
                i += 1;
            }
        }
    }
    output
}
