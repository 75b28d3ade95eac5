//! End-to-end behavior of the line pipeline.

use vigenere_core::{CaseMode, Config, Pipeline, VigenereError};

fn run(config: &Config, key: &str, lines: &[&str]) -> String {
    let mut pipeline = Pipeline::new(config, key).unwrap();
    let mut output: String = lines.iter().map(|line| pipeline.process_line(line)).collect();
    if let Some(tail) = pipeline.finish() {
        output.push_str(tail);
    }
    output
}

#[test]
fn test_encode_then_decode_multiline() {
    let lines = ["Meet me by the old mill,", "at half past nine.", "", "Come alone!"];
    let encoded = run(&Config::default(), "Secret,3", &lines);
    assert_ne!(encoded, lines.join("\n") + "\n");

    let encoded_lines: Vec<&str> = encoded.lines().collect();
    let decode = Config {
        decode: true,
        ..Config::default()
    };
    let decoded = run(&decode, "Secret,3", &encoded_lines);
    assert_eq!(decoded, lines.join("\n") + "\n");
}

#[test]
fn test_wrapped_output() {
    let config = Config {
        cols: 12,
        ..Config::default()
    };
    let output = run(&config, "0", &["The quick brown fox jumps over the lazy dog"]);
    assert_eq!(output, "The quick\nbrown fox\njumps over\nthe lazy dog\n");
}

#[test]
fn test_wrapped_output_is_enciphered() {
    let config = Config {
        cols: 12,
        ..Config::default()
    };
    let output = run(&config, "1", &["The quick brown fox"]);
    assert_eq!(output, "Uif rvjdl\ncspxo gpy\n");
}

#[test]
fn test_blocks_span_lines() {
    let config = Config {
        case: CaseMode::Upper,
        block_size: 5,
        cols: 11,
        ..Config::default()
    };
    let output = run(&config, "0", &["Attack at", "dawn, then", "retreat"]);
    assert_eq!(output, "ATTAC KATDA\nWNTHE NRETR\nEAT\n");
}

#[test]
fn test_full_row_blocks() {
    let config = Config {
        case: CaseMode::Lower,
        block_size: -1,
        cols: 8,
        ..Config::default()
    };
    let output = run(&config, "0", &["One Two", "Three Four"]);
    assert_eq!(output, "onetwoth\nreefour\n");
}

#[test]
fn test_blocks_ending_on_row_need_no_tail() {
    let config = Config {
        block_size: 2,
        cols: 5,
        ..Config::default()
    };
    let output = run(&config, "0", &["abcd"]);
    assert_eq!(output, "ab cd\n");
}

#[test]
fn test_unusable_key_is_rejected() {
    for key in ["", ",", "!?#", " , "] {
        assert!(matches!(
            Pipeline::new(&Config::default(), key),
            Err(VigenereError::EmptyKey)
        ));
    }
}

#[test]
fn test_degenerate_blocks_are_rejected() {
    let cases = [(3, -1), (3, 2), (-1, 0), (-1, -1)];
    for (block_size, cols) in cases {
        let config = Config {
            block_size,
            cols,
            ..Config::default()
        };
        let err = Pipeline::new(&config, "3").unwrap_err();
        assert!(err.is_configuration(), "block {} cols {}", block_size, cols);
    }
}
