//! End-to-end conversion scenarios
//!
//! Each case feeds a complete intra-chunk document through
//! `DocumentConverter` and checks the exact inter-chunk text.

use rstest::rstest;
use ssf_parser::ssf::{convert_str, ConvertError, DocumentConverter};

fn document(tokens: &[&str]) -> String {
    let mut lines = vec!["<Sentence id=\"1\">".to_string()];
    lines.extend(tokens.iter().map(|token| token.to_string()));
    lines.push("</Sentence>".to_string());
    lines.join("\n")
}

#[test]
fn single_chunk_without_dependency() {
    let source = document(&["1\tword\tNN\t<fs af=3sfn name=n1 chunkType=head:'NP1' chunkId='NP1'>"]);

    assert_eq!(
        convert_str(&source).unwrap(),
        "<Sentence id=\"1\">\n\
         1\t((\tNP\t<fs name='NP1'>\n\
         1.1\tword\tNN\t<fs af=3sfn name=n1>\n\
         \t))\n\
         </Sentence>"
    );
}

#[test]
fn inter_chunk_dependency_resolves_parent_chunk() {
    let source = document(&[
        "1\tword\tNN\t<fs af=3sfn name=n1 chunkType=head:'NP1' chunkId='NP1'>",
        "2\twent\tVM\t<fs af=go,v name=n2 chunkType=head:'VGF1' chunkId='VGF1' drel=k1:'n1'>",
    ]);

    let text = convert_str(&source).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[4], "2\t((\tVGF\t<fs name='VGF1' drel=k1:NP1'>");
    assert_eq!(lines[5], "2.1\twent\tVM\t<fs af=go,v name=n2>");
}

#[test]
fn dependency_on_a_later_chunk_resolves() {
    let source = document(&[
        "1\tword\tNN\t<fs af=a name=n1 chunkType=head:NP1 chunkId=NP1 drel=k1:n2>",
        "2\twent\tVM\t<fs af=b name=n2 chunkType=head:VGF1 chunkId=VGF1>",
    ]);

    let text = convert_str(&source).unwrap();
    assert!(text.contains("1\t((\tNP\t<fs name='NP1' drel=k1:VGF1'>"));
}

#[test]
fn malformed_line_aborts_conversion() {
    let source = document(&["1\tword\t<fs af=3sfn name=n1 chunkType=head:NP1>"]);

    let err = DocumentConverter::default().convert(&source).unwrap_err();
    assert!(matches!(err.kind, ConvertError::Format(_)));
    assert_eq!(err.line, 2);
}

#[rstest]
#[case::chunk_id_mismatch(
    "1\tw\tNN\t<fs af=a name=n1 chunkType=head:NP1 chunkId=NP2>",
    "consistency error"
)]
#[case::unregistered_parent(
    "1\tw\tNN\t<fs af=a name=n1 chunkType=head:NP1 drel=k1:n5>",
    "lookup error"
)]
#[case::missing_name(
    "1\tw\tNN\t<fs af=a chunkType=head:NP1>",
    "missing attribute 'name'"
)]
#[case::feature_without_value(
    "1\tw\tNN\t<fs af=a name=n1 chunkType=head:NP1 broken>",
    "format error"
)]
#[case::chunk_type_without_name(
    "1\tw\tNN\t<fs af=a name=n1 chunkType=head>",
    "format error"
)]
#[case::not_a_feature_block("1\tw\tNN\taf=a", "format error")]
fn fatal_errors(#[case] token: &str, #[case] expected: &str) {
    let err = convert_str(&document(&[token])).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains(expected),
        "expected '{}' in '{}'",
        expected,
        message
    );
    assert!(message.starts_with("sentence 1 (id=1), line 2:"));
}

#[rstest]
#[case("NP1", "NP")]
#[case("VGF2", "VGF")]
#[case("CCP", "CCP")]
#[case("NULL__VGNN1", "NULL__VGNN")]
fn open_line_carries_chunk_tag(#[case] chunk: &str, #[case] tag: &str) {
    let token = format!("1\tw\tNN\t<fs af=a name=n1 chunkType=other:{}>", chunk);
    let text = convert_str(&document(&[&token])).unwrap();
    assert_eq!(text.lines().nth(1), Some(format!("1\t((\t{}", tag).as_str()));
}

#[test]
fn marker_lines_are_copied_verbatim() {
    let source = "  <Sentence id=\"4\" lang=\"hin\">  \n</Sentence>";
    assert_eq!(
        convert_str(source).unwrap(),
        "<Sentence id=\"4\" lang=\"hin\">\n</Sentence>"
    );
}
