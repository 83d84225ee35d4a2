use flowcanvas::types::{VariableDeclaration, Visibility};

#[allow(dead_code)]
pub fn names(scope: &[VariableDeclaration]) -> Vec<&str> {
    scope.iter().map(|d| d.name.as_str()).collect()
}

#[allow(dead_code)]
pub fn find<'a>(scope: &'a [VariableDeclaration], name: &str) -> &'a VariableDeclaration {
    scope
        .iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("expected declaration '{name}', got: {:?}", names(scope)))
}

#[allow(dead_code)]
pub fn assert_declares(scope: &[VariableDeclaration], name: &str) {
    find(scope, name);
}

#[allow(dead_code)]
pub fn assert_absent(scope: &[VariableDeclaration], name: &str) {
    assert!(
        !scope.iter().any(|d| d.name == name),
        "expected '{name}' to be absent, got: {:?}",
        names(scope)
    );
}

#[allow(dead_code)]
pub fn assert_visibility(scope: &[VariableDeclaration], name: &str, visibility: Visibility) {
    let decl = find(scope, name);
    assert_eq!(
        decl.visibility, visibility,
        "declaration '{name}' has wrong visibility"
    );
}
