#[cfg(test)]
use super::tokenizer::Tokenizer;
#[cfg(test)]
use hex;

#[cfg(test)]
fn test_detokenizer(hex_tokens: &str, expected: &str) {
    let tokens = hex::decode(hex_tokens).expect("hex error");
    let tokenizer = Tokenizer::new();
    let actual = tokenizer.detokenize(&tokens);
    assert_eq!(actual,expected);
}

mod output_statements {
    #[test]
    fn single_line() {
        let expected = "10 CLS\n";
        let tokens = "000A0200FB0D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn multi_line() {
        let expected = "10 PRINT \"HELLO\"\n20 FOR I=1 TO 10\n30 NEXT I\n";
        let tokens = "000A0900F52248454C4C4F220D\
            00141500EB493D310E000001000020CC31300E00000A00000D\
            001E0300F3490D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn canonical_go_to() {
        let expected = "10 GO TO 100\n";
        let tokens = "000A0B00EC3130300E00006400000D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn no_space_before_symbols() {
        let expected = "10 LET A$=CHR$(6)\n";
        let tokens = "000A0900F141243DC22836290D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn adjacent_tokens() {
        let expected = "10 PRINTAT\n";
        let tokens = "000A0300F5AC0D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn space_before_point() {
        let expected = "10 PRINT .5\n";
        let tokens = "000A0A00F52E350E00000000000D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn token_before_hidden_number() {
        let expected = "10 COPY\n";
        let tokens = "000A0800FF0E00000100000D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn rem_text() {
        let expected = "10 REM hello world : PRINT\n";
        let tokens = "000A1600EA2068656C6C6F20776F726C64203A205052494E540D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn control_bytes_dropped() {
        let expected = "10 ABC\u{a9}\n";
        let tokens = "000A070041014280437F0D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn empty_program() {
        super::test_detokenizer("", "");
    }
}

mod malformed {
    #[test]
    fn truncated_line() {
        let expected = "10 CLS\n";
        let tokens = "000A0200FB0D0014FF00F5";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn stray_bytes() {
        let expected = "10 CLS\n";
        let tokens = "000A0200FB0D0014";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn missing_terminator() {
        let expected = "10 CLS\n";
        let tokens = "000A0200FB";
        super::test_detokenizer(tokens, expected);
    }
}

mod headers {
    use super::Tokenizer;
    use crate::fs::plus3dos;
    use crate::lang::zxbasic::settings;

    fn with_header(body: &str,autostart: Option<u16>) -> Vec<u8> {
        let mut body = hex::decode(body).expect("hex error");
        let mut ans = plus3dos::build_header(body.len() as u32,autostart).expect("header failed");
        ans.append(&mut body);
        ans
    }
    #[test]
    fn autostart_directive() {
        let tokenizer = Tokenizer::new();
        let dat = with_header("000A0200FB0D",Some(10));
        assert_eq!(tokenizer.detokenize(&dat),"#autostart 10\n10 CLS\n");
    }
    #[test]
    fn no_autostart() {
        let tokenizer = Tokenizer::new();
        let dat = with_header("000A0200FB0D",None);
        assert_eq!(tokenizer.detokenize(&dat),"10 CLS\n");
    }
    #[test]
    fn directive_disabled() {
        let mut tokenizer = Tokenizer::new();
        let config = settings::parse(r#"{"detokenizer":{"autostartDirective":false}}"#).expect("bad settings");
        tokenizer.set_config(&config);
        let dat = with_header("000A0200FB0D",Some(10));
        assert_eq!(tokenizer.detokenize(&dat),"10 CLS\n");
    }
    #[test]
    fn alternate_signature() {
        let tokenizer = Tokenizer::new();
        let mut dat = with_header("000A0200FB0D",Some(0));
        dat[0..8].copy_from_slice(b"ZXPLUS3\x00");
        assert_eq!(tokenizer.detokenize(&dat),"#autostart 0\n10 CLS\n");
    }
    #[test]
    fn bad_checksum_accepted() {
        let tokenizer = Tokenizer::new();
        let mut dat = with_header("000A0200FB0D",None);
        dat[127] = dat[127].wrapping_add(1);
        assert_eq!(tokenizer.detokenize(&dat),"10 CLS\n");
    }
}

mod round_trip {
    use super::Tokenizer;

    #[test]
    fn listing() {
        let listing = "#autostart 10\n\
            10 REM demo \u{a9} 2024\n\
            20 BORDER 1: PAPER 7: CLS\n\
            30 FOR I=1 TO 10 STEP 2\n\
            40 PRINT \"LINE \";I\n\
            50 GO SUB 100\n\
            60 NEXT I\n\
            70 STOP\n\
            100 LET X=X*2+.5: RETURN\n";
        let tokenizer = Tokenizer::new();
        let file = tokenizer.tokenize_file(listing).expect("tokenizer failed");
        assert_eq!(tokenizer.detokenize(&file),listing);
    }
    #[test]
    fn via_entry_points() {
        use crate::lang::zxbasic::{encode,encode_with_header,decode};
        let listing = "10 PRINT \"HELLO\"\n20 GO TO 10\n";
        let (bytes,autostart) = encode(listing);
        assert_eq!(autostart,None);
        assert_eq!(decode(&bytes),listing);
        let file = encode_with_header(listing).expect("tokenizer failed");
        assert_eq!(decode(&file),listing);
    }
}
