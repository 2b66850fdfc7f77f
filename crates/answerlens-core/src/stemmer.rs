//! Porter suffix-stripping stemmer.
//!
//! A straight implementation of M.F. Porter's 1980 algorithm over ASCII
//! lowercase words. Words containing anything other than ASCII letters and
//! digits, and words of two characters or fewer, are returned unchanged.

/// Reduce a lowercase word to its root form.
pub fn stem(word: &str) -> String {
    let plain = word
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    if word.len() <= 2 || !plain {
        return word.to_string();
    }

    let mut w = word.as_bytes().to_vec();
    step1a(&mut w);
    step1b(&mut w);
    step1c(&mut w);
    step2(&mut w);
    step3(&mut w);
    step4(&mut w);
    step5(&mut w);

    // Only ASCII bytes were ever written.
    String::from_utf8_lossy(&w).into_owned()
}

fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences in `w` (Porter's `m`).
fn measure(w: &[u8]) -> usize {
    let n = w.len();
    let mut i = 0;
    while i < n && is_consonant(w, i) {
        i += 1;
    }
    let mut m = 0;
    loop {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i >= n {
            return m;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
    }
}

fn has_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// consonant-vowel-consonant ending where the last consonant is not w, x or y.
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

fn stem_len(w: &[u8], suffix: &str) -> Option<usize> {
    w.ends_with(suffix.as_bytes())
        .then(|| w.len() - suffix.len())
}

fn replace_suffix(w: &mut Vec<u8>, stem_len: usize, replacement: &str) {
    w.truncate(stem_len);
    w.extend_from_slice(replacement.as_bytes());
}

/// Apply the first rule whose suffix matches, if the stem measure exceeds `min_m`.
fn apply_rules(w: &mut Vec<u8>, rules: &[(&str, &str)], min_m: usize) {
    for (suffix, replacement) in rules {
        if let Some(len) = stem_len(w, suffix) {
            if measure(&w[..len]) > min_m {
                replace_suffix(w, len, replacement);
            }
            return;
        }
    }
}

fn step1a(w: &mut Vec<u8>) {
    if let Some(len) = stem_len(w, "sses") {
        replace_suffix(w, len, "ss");
    } else if let Some(len) = stem_len(w, "ies") {
        replace_suffix(w, len, "i");
    } else if !w.ends_with(b"ss") {
        if let Some(len) = stem_len(w, "s") {
            w.truncate(len);
        }
    }
}

fn step1b(w: &mut Vec<u8>) {
    if let Some(len) = stem_len(w, "eed") {
        if measure(&w[..len]) > 0 {
            replace_suffix(w, len, "ee");
        }
        return;
    }

    let stripped = ["ed", "ing"].iter().any(|suffix| match stem_len(w, suffix) {
        Some(len) if has_vowel(&w[..len]) => {
            w.truncate(len);
            true
        }
        _ => false,
    });
    if !stripped {
        return;
    }

    if w.ends_with(b"at") || w.ends_with(b"bl") || w.ends_with(b"iz") {
        w.push(b'e');
    } else if ends_double_consonant(w) && !matches!(w[w.len() - 1], b'l' | b's' | b'z') {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push(b'e');
    }
}

fn step1c(w: &mut Vec<u8>) {
    if let Some(len) = stem_len(w, "y") {
        if has_vowel(&w[..len]) {
            replace_suffix(w, len, "i");
        }
    }
}

fn step2(w: &mut Vec<u8>) {
    const RULES: &[(&str, &str)] = &[
        ("ational", "ate"),
        ("tional", "tion"),
        ("enci", "ence"),
        ("anci", "ance"),
        ("izer", "ize"),
        ("abli", "able"),
        ("alli", "al"),
        ("entli", "ent"),
        ("eli", "e"),
        ("ousli", "ous"),
        ("ization", "ize"),
        ("ation", "ate"),
        ("ator", "ate"),
        ("alism", "al"),
        ("iveness", "ive"),
        ("fulness", "ful"),
        ("ousness", "ous"),
        ("aliti", "al"),
        ("iviti", "ive"),
        ("biliti", "ble"),
    ];
    apply_rules(w, RULES, 0);
}

fn step3(w: &mut Vec<u8>) {
    const RULES: &[(&str, &str)] = &[
        ("icate", "ic"),
        ("ative", ""),
        ("alize", "al"),
        ("iciti", "ic"),
        ("ical", "ic"),
        ("ful", ""),
        ("ness", ""),
    ];
    apply_rules(w, RULES, 0);
}

fn step4(w: &mut Vec<u8>) {
    const SUFFIXES: &[&str] = &[
        "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
        "ou", "ism", "ate", "iti", "ous", "ive", "ize",
    ];
    for suffix in SUFFIXES {
        let Some(len) = stem_len(w, suffix) else {
            continue;
        };
        if *suffix == "ion" && !(len > 0 && matches!(w[len - 1], b's' | b't')) {
            continue;
        }
        if measure(&w[..len]) > 1 {
            w.truncate(len);
        }
        return;
    }
}

fn step5(w: &mut Vec<u8>) {
    if let Some(len) = stem_len(w, "e") {
        let m = measure(&w[..len]);
        if m > 1 || (m == 1 && !ends_cvc(&w[..len])) {
            w.truncate(len);
        }
    }
    if w.ends_with(b"ll") && measure(w) > 1 {
        w.pop();
    }
}
