//! Latin → Had Lampung transliteration.
//!
//! The bundled glyph font encodes the syllabary in the Private Use Area:
//! base consonants carry an inherent `a`, vowel signs modify it, and the
//! nengen mark kills it for closed syllables. The mapping is total: anything
//! outside the syllabary passes through unchanged, so the function never
//! fails on arbitrary input.

/// Vowel-killer mark for syllable-final consonants.
const NENGEN: char = '\u{E627}';

/// Base glyph (inherent `a`) for a consonant, longest transcription first.
fn consonant(rest: &[char]) -> Option<(char, usize)> {
    match rest {
        ['n', 'g', ..] => Some(('\u{E602}', 2)),
        ['n', 'y', ..] => Some(('\u{E60B}', 2)),
        ['g', 'h', ..] | ['k', 'h', ..] => Some(('\u{E613}', 2)),
        ['k', ..] => Some(('\u{E600}', 1)),
        ['g', ..] => Some(('\u{E601}', 1)),
        ['p', ..] => Some(('\u{E603}', 1)),
        ['b', ..] => Some(('\u{E604}', 1)),
        ['m', ..] => Some(('\u{E605}', 1)),
        ['t', ..] => Some(('\u{E606}', 1)),
        ['d', ..] => Some(('\u{E607}', 1)),
        ['n', ..] => Some(('\u{E608}', 1)),
        ['c', ..] => Some(('\u{E609}', 1)),
        ['j', ..] => Some(('\u{E60A}', 1)),
        ['y', ..] => Some(('\u{E60C}', 1)),
        ['l', ..] => Some(('\u{E60E}', 1)),
        ['r', ..] => Some(('\u{E60F}', 1)),
        ['s', ..] => Some(('\u{E610}', 1)),
        ['w', ..] => Some(('\u{E611}', 1)),
        ['h', ..] => Some(('\u{E612}', 1)),
        _ => None,
    }
}

/// Vowel sign following a consonant. The inherent `a` needs no sign.
fn vowel_sign(rest: &[char]) -> Option<(Option<char>, usize)> {
    match rest {
        ['a', 'i', ..] => Some((Some('\u{E625}'), 2)),
        ['a', 'u', ..] => Some((Some('\u{E626}'), 2)),
        ['a', ..] => Some((None, 1)),
        ['i', ..] => Some((Some('\u{E620}'), 1)),
        ['u', ..] => Some((Some('\u{E621}'), 1)),
        ['e', ..] => Some((Some('\u{E622}'), 1)),
        ['o', ..] => Some((Some('\u{E623}'), 1)),
        ['é', ..] => Some((Some('\u{E624}'), 1)),
        _ => None,
    }
}

/// Vowel-carrier base for a syllable with no onset consonant.
const A_BASE: char = '\u{E60D}';

/// Renders a Latin-transcribed Lampung word in the glyph encoding of the
/// bundled font. Deterministic, side-effect free, and total over any input.
pub fn to_aksara(latin: &str) -> String {
    let chars: Vec<char> = latin.to_lowercase().chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        if let Some((base, used)) = consonant(&chars[i..]) {
            out.push(base);
            i += used;
            match vowel_sign(&chars[i..]) {
                Some((sign, used)) => {
                    if let Some(sign) = sign {
                        out.push(sign);
                    }
                    i += used;
                }
                // Closed syllable: kill the inherent vowel.
                None => out.push(NENGEN),
            }
        } else if let Some((sign, used)) = vowel_sign(&chars[i..]) {
            out.push(A_BASE);
            if let Some(sign) = sign {
                out.push(sign);
            }
            i += used;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}
