//! Display name cleanup for registry-supplied author names

/// Characters that mark a token as an annotation, URL or markup rather than a name part
const TOKEN_MARKERS: [char; 3] = ['(', ')', '/'];

/// Characters removed from the raw name when no token survives
const STRIPPED_CHARS: [char; 4] = ['<', '>', '(', ')'];

/// Strips parenthetical annotations, URLs and stray markup from a display name.
///
/// Tokens (split on single spaces) containing `(`, `)` or `/` are dropped.
/// When nothing survives, the raw string with `<>()` removed is used instead.
/// The step is repeated until the output is stable, so the result is always
/// a fixed point: `sanitize_name(&sanitize_name(x)) == sanitize_name(x)`.
pub fn sanitize_name(raw: &str) -> String {
    let mut current = sanitize_step(raw);
    loop {
        let next = sanitize_step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_step(raw: &str) -> String {
    let kept = raw
        .split(' ')
        .filter(|token| !token.contains(TOKEN_MARKERS))
        .collect::<Vec<_>>()
        .join(" ");

    if kept.is_empty() {
        raw.replace(STRIPPED_CHARS, "")
    } else {
        kept
    }
}
