use std::collections::HashMap;

use neon_core::lang::tokens::{self, TokenKind};

#[test]
fn token_names_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, TokenKind> = HashMap::new();

    for info in tokens::TOKEN_KINDS {
        assert_eq!(
            tokens::from_str(info.canonical),
            Some(info.id),
            "token name not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            tokens::as_str(info.id),
            info.canonical,
            "token as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate token name {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
    assert_eq!(seen.len(), TokenKind::COUNT);
}

#[test]
fn token_table_is_in_ordinal_order() {
    assert_eq!(tokens::TOKEN_KINDS.len(), TokenKind::COUNT);

    for (idx, info) in tokens::TOKEN_KINDS.iter().enumerate() {
        assert_eq!(
            info.id.ordinal() as usize,
            idx,
            "token table entry {} holds {:?}",
            idx,
            info.id
        );
        assert_eq!(TokenKind::ALL[idx], info.id);
    }
}

#[test]
fn token_lexemes_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, TokenKind> = HashMap::new();

    for info in tokens::TOKEN_KINDS {
        let Some(lexeme) = info.lexeme else {
            continue;
        };
        assert_eq!(
            tokens::from_lexeme(lexeme),
            Some(info.id),
            "token lexeme not resolvable: {:?}",
            lexeme
        );
        if let Some(prev) = seen.insert(lexeme, info.id) {
            panic!("duplicate token lexeme {:?}: {:?} and {:?}", lexeme, prev, info.id);
        }
    }
}

#[test]
fn token_names_are_uppercase_identifiers() {
    for kind in TokenKind::ALL {
        let name = kind.as_str();
        assert!(!name.is_empty());
        assert!(
            name.chars().all(|c| c.is_ascii_uppercase()),
            "token name is not an uppercase identifier: {:?}",
            name
        );
        assert!(
            !name.starts_with(tokens::FALLBACK_PREFIX),
            "token name collides with the fallback rendering: {:?}",
            name
        );
    }
}

#[test]
fn token_metadata_is_described() {
    for info in tokens::TOKEN_KINDS {
        assert!(!info.description.is_empty(), "missing description for {:?}", info.id);
        assert!(!info.since.is_empty(), "missing since-version for {:?}", info.id);
        assert_eq!(tokens::info_for(info.id).canonical, info.canonical);
    }
}

#[test]
fn renderer_is_deterministic_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                (-50..50)
                    .map(|raw| tokens::name(raw + t).into_owned())
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let rendered = handle.join().expect("renderer thread panicked");
        for (i, text) in rendered.iter().enumerate() {
            let raw = i as i32 - 50 + t as i32;
            assert_eq!(text.as_str(), tokens::name(raw));
        }
    }
}
