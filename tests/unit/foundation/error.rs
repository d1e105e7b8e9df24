use super::*;

#[test]
fn ctor_helpers_map_to_variants() {
    assert!(matches!(
        PawtrailError::validation("x"),
        PawtrailError::Validation(_)
    ));
    assert!(matches!(PawtrailError::render("x"), PawtrailError::Render(_)));
    assert!(matches!(
        PawtrailError::upstream("x"),
        PawtrailError::Upstream(_)
    ));
    assert!(matches!(
        PawtrailError::not_found("x"),
        PawtrailError::NotFound(_)
    ));
}

#[test]
fn display_includes_category_prefix() {
    let err = PawtrailError::forbidden("host 'evil.example' is not allow-listed");
    assert_eq!(
        err.to_string(),
        "forbidden: host 'evil.example' is not allow-listed"
    );
}

#[test]
fn anyhow_errors_wrap_transparently() {
    let inner = anyhow::anyhow!("disk on fire");
    let err: PawtrailError = inner.into();
    assert_eq!(err.to_string(), "disk on fire");
}
