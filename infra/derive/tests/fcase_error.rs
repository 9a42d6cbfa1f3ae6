#[test]
fn fcase_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/fcase_error_pass.rs");
    t.pass("tests/ui/fcase_error_extra_fields.rs");
}
