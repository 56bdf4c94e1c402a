use super::*;

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("/api", "/torneos/"), "/api/torneos/");
    assert_eq!(endpoint("https://host/api/", "/auth/login/"), "https://host/api/auth/login/");
    assert_eq!(endpoint("/api", "usuarios/me/"), "/api/usuarios/me/");
}

#[test]
fn http_api_url_uses_its_base() {
    let api = HttpApi::new("https://asopadel.example/api");
    assert_eq!(api.url(CURRENT_USER_PATH), "https://asopadel.example/api/usuarios/me/");
}

#[test]
fn collection_paths_match_api_routes() {
    assert_eq!(Collection::Tournaments.path(), "/torneos/");
    assert_eq!(Collection::Courts.path(), "/canchas/");
    assert_eq!(Collection::Matches.path(), "/partidos/");
    assert_eq!(Collection::Users.path(), "/usuarios/");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_calls_are_unavailable_outside_the_browser() {
    let api = HttpApi::new("/api");
    let result = futures::executor::block_on(api.current_user("token"));
    assert_eq!(result, Err(ApiError::Unavailable));
    let listed = futures::executor::block_on(api.list::<crate::net::types::Court>(Collection::Courts, None));
    assert_eq!(listed, Err(ApiError::Unavailable));
}
