//! Edge case tests for jslex-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_with_handler, Category, LexErrorKind, TokenStream};
    use jslex_util::{Handler, Span};

    fn categories(stream: &TokenStream<'_>) -> Vec<Category> {
        stream.categories().collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(tokenize("x").pairs(), vec![("x", Category::Identifier)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} = 1;", name);
        let stream = tokenize(&source);
        assert_eq!(stream[1].lexeme, name);
        assert_eq!(stream[1].category, Category::Identifier);
    }

    #[test]
    fn test_edge_every_keyword() {
        for keyword in crate::tables::KEYWORDS {
            assert_eq!(tokenize(keyword).pairs(), vec![(keyword, Category::Keyword)]);
        }
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        assert_eq!(tokenize("letter").pairs(), vec![("letter", Category::Identifier)]);
        assert_eq!(tokenize("if_").pairs(), vec![("if_", Category::Identifier)]);
    }

    #[test]
    fn test_edge_comment_category_never_emitted() {
        let stream = tokenize("// a\n/* b */ c /* d */");
        assert!(stream.categories().all(|c| c != Category::Comment));
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let stream = tokenize("let a;\r\nlet b;\r\n");
        assert_eq!(stream.len(), 6);
        assert_eq!(stream[3].span, Span::new(8, 11, 2, 1));
    }

    #[test]
    fn test_edge_line_comment_at_eof() {
        assert_eq!(tokenize("x // no newline").len(), 1);
    }

    #[test]
    fn test_edge_line_tracking_after_block_comment() {
        let stream = tokenize("/* one\ntwo\nthree */ x");
        assert_eq!(stream[0].span.line, 3);
        assert_eq!(stream[0].span.column, 10);
    }

    #[test]
    fn test_edge_multiline_string_span() {
        let stream = tokenize("\"a\nb\" c");
        assert_eq!(stream[0].lexeme, "\"a\nb\"");
        assert_eq!(stream[0].span.line, 1);
        assert_eq!(stream[1].span, Span::new(6, 7, 2, 4));
    }

    #[test]
    fn test_edge_unicode_in_string() {
        let stream = tokenize("s = \"héllo 世界\";");
        assert_eq!(stream[2].lexeme, "\"héllo 世界\"");
        assert_eq!(stream[2].category, Category::Literal);
        assert_eq!(stream[3].span.column, 15);
    }

    #[test]
    fn test_edge_unrecognized_then_resume() {
        assert_eq!(
            tokenize("a#b").pairs(),
            vec![
                ("a", Category::Identifier),
                ("#", Category::Error(LexErrorKind::UnrecognizedSymbol)),
                ("b", Category::Identifier),
            ]
        );
    }

    #[test]
    fn test_edge_unterminated_string_swallows_rest() {
        let stream = tokenize("x = \"abc; let y = 2;");
        assert_eq!(stream.len(), 3);
        assert_eq!(
            stream[2].category,
            Category::Error(LexErrorKind::UnterminatedString)
        );
    }

    #[test]
    fn test_edge_lone_quote() {
        assert_eq!(
            categories(&tokenize("\"")),
            vec![Category::Error(LexErrorKind::UnterminatedString)]
        );
        assert_eq!(
            categories(&tokenize("'")),
            vec![Category::Error(LexErrorKind::UnterminatedCharacterLiteral)]
        );
    }

    #[test]
    fn test_edge_sign_dot_number() {
        assert_eq!(
            tokenize("-.5").pairs(),
            vec![("-", Category::Operator), (".5", Category::Literal)]
        );
    }

    #[test]
    fn test_edge_increment_vs_signed_number() {
        assert_eq!(
            tokenize("i++").pairs(),
            vec![("i", Category::Identifier), ("++", Category::Operator)]
        );
        assert_eq!(
            tokenize("i+1").pairs(),
            vec![("i", Category::Identifier), ("+1", Category::Literal)]
        );
    }

    #[test]
    fn test_edge_diagnostics_match_error_tokens() {
        let handler = Handler::new();
        let stream = tokenize_with_handler("@ \"open", &handler);
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), stream.errors().count());
        for (diag, token) in diags.iter().zip(stream.errors()) {
            assert_eq!(diag.span, token.span);
            assert_eq!(diag.code, token.error_kind().map(LexErrorKind::code));
        }
    }

    #[test]
    fn test_edge_many_tokens() {
        let source = "a = b + 1;\n".repeat(2000);
        let stream = tokenize(&source);
        assert_eq!(stream.len(), 12000);
        assert_eq!(stream[stream.len() - 1].span.line, 2000);
    }

    // ==================== CONCURRENCY ====================

    #[test]
    fn test_parallel_scans_do_not_interfere() {
        let sources: Vec<String> = (0..8)
            .map(|i| {
                format!("let v{i} = {i} * 0x{i}F; /* {i} */ v{i}.x{i} <<= \"s{i}\";\n").repeat(50)
            })
            .collect();
        let expected: Vec<_> = sources
            .iter()
            .map(|s| tokenize(s).pairs().len())
            .collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = sources
                .iter()
                .map(|s| scope.spawn(move || tokenize(s).pairs().len()))
                .collect();
            for (handle, want) in handles.into_iter().zip(expected) {
                assert_eq!(handle.join().unwrap(), want);
            }
        });
    }

    // ==================== PROPERTIES ====================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn source_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                "[ -~\\n\\t]{0,80}",
                "\\PC{0,40}",
                "[a-z0-9_.+\\-*/=<>!&|\"' \\n]{0,60}",
            ]
        }

        fn token_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
                prop::sample::select(crate::tables::KEYWORDS.to_vec()).prop_map(String::from),
                prop::sample::select(crate::tables::OPERATORS.to_vec()).prop_map(String::from),
                prop::sample::select(vec!["(", ")", "{", "}", "[", "]", ";", ",", "."])
                    .prop_map(String::from),
                "[0-9]{1,6}",
                "[0-9]{1,3}\\.[0-9]{1,3}",
                "0x[0-9a-fA-F]{1,6}",
                "\"[a-z ]{0,10}\"",
                "/\\* [a-z]{0,6} \\*/",
            ]
        }

        proptest! {
            #[test]
            fn prop_lexemes_are_source_slices(source in source_strategy()) {
                let stream = tokenize(&source);
                let mut last_end = 0;
                for token in &stream {
                    prop_assert!(!token.lexeme.is_empty());
                    prop_assert_eq!(token.span.slice(&source).unwrap(), token.lexeme);
                    prop_assert_eq!(token.span.len(), token.lexeme.len());
                    prop_assert!(token.span.start >= last_end);
                    last_end = token.span.end;
                }
            }

            #[test]
            fn prop_gaps_are_only_skipped_text(source in source_strategy()) {
                let stream = tokenize(&source);
                let mut covered = 0;
                let mut last_end = 0;
                for token in &stream {
                    let gap = &source[last_end..token.span.start];
                    prop_assert!(tokenize(gap).is_empty(), "gap {:?} is not skippable", gap);
                    covered += gap.len() + token.lexeme.len();
                    last_end = token.span.end;
                }
                let tail = &source[last_end..];
                prop_assert!(tokenize(tail).is_empty());
                prop_assert_eq!(covered + tail.len(), source.len());
            }

            #[test]
            fn prop_respacing_keeps_categories(
                tokens in prop::collection::vec(token_strategy(), 0..24)
            ) {
                let source = tokens.join(" ");
                let first = tokenize(&source);
                let respaced = first.lexemes().collect::<Vec<_>>().join(" ");
                let second = tokenize(&respaced);
                prop_assert_eq!(categories(&first), categories(&second));
            }

            #[test]
            fn prop_identifiers_scan_whole(name in "[a-zA-Z_][a-zA-Z0-9_]{0,40}") {
                let stream = tokenize(&name);
                prop_assert_eq!(stream.len(), 1);
                prop_assert!(matches!(
                    stream[0].category,
                    Category::Identifier | Category::Keyword
                ));
            }

            #[test]
            fn prop_decimal_and_hex_are_literals(
                digits in "[0-9]{1,20}",
                hex in "[0-9a-fA-F]{1,16}"
            ) {
                prop_assert_eq!(
                    tokenize(&digits).pairs(),
                    vec![(digits.as_str(), Category::Literal)]
                );
                let hex = format!("0x{}", hex);
                prop_assert_eq!(
                    tokenize(&hex).pairs(),
                    vec![(hex.as_str(), Category::Literal)]
                );
            }

            #[test]
            fn prop_plain_strings_are_literals(body in "[^\"\\\\]{0,60}") {
                let source = format!("\"{}\"", body);
                let stream = tokenize(&source);
                prop_assert_eq!(stream.len(), 1);
                prop_assert_eq!(stream[0].category, Category::Literal);
            }
        }
    }
}
