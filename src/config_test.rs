use super::*;

fn site() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn resolve_addr_keeps_site_addr_without_port() {
    assert_eq!(resolve_addr(site(), None).unwrap(), site());
    assert_eq!(resolve_addr(site(), Some("  ")).unwrap(), site());
}

#[test]
fn resolve_addr_binds_all_interfaces_for_port() {
    let addr = resolve_addr(site(), Some("8080")).unwrap();
    assert_eq!(addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_addr_rejects_garbage() {
    let err = resolve_addr(site(), Some("eighty")).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT value \"eighty\"");
}
