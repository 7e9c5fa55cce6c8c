use crate::schemas::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi_schema_generation() {
    let openapi = ApiDoc::openapi();

    assert!(openapi.components.is_some());
    let components = openapi.components.as_ref().unwrap();

    assert!(components.schemas.contains_key("HoldingInput"));
    assert!(components.schemas.contains_key("HealthResponse"));
    assert!(components.schemas.contains_key("Holding"));
    assert!(components.schemas.contains_key("NormalizedSlice"));

    let json_result = serde_json::to_string(&openapi);
    assert!(json_result.is_ok());
}

#[test]
fn test_health_response_schema_structure() {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.as_ref().unwrap();
    let health_response_schema = components.schemas.get("HealthResponse").unwrap();

    if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = health_response_schema {
        let properties = &obj.properties;
        assert!(properties.contains_key("status"));
        assert!(properties.contains_key("version"));
        assert!(properties.contains_key("holdings"));
    } else {
        panic!("HealthResponse should be an object schema");
    }
}

#[test]
fn test_holding_schema_structure() {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.as_ref().unwrap();
    let holding_schema = components.schemas.get("Holding").unwrap();

    if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = holding_schema {
        assert!(obj.properties.contains_key("symbol"));
        assert!(obj.properties.contains_key("weight"));
    } else {
        panic!("Holding should be an object schema");
    }
}

#[test]
fn test_openapi_paths_contain_portfolio_and_health() {
    let openapi = ApiDoc::openapi();

    for path in ["/health", "/portfolio"] {
        let item = openapi.paths.paths.get(path).unwrap_or_else(|| panic!("{path} missing"));
        let get = item.operations.get(&utoipa::openapi::PathItemType::Get);
        assert!(get.is_some(), "{path} should have a GET operation");
        assert!(get.unwrap().responses.responses.contains_key("200"));
    }
}

#[test]
fn test_portfolio_response_references_holding_input() {
    let openapi = ApiDoc::openapi();
    let openapi_json = serde_json::to_string(&openapi).unwrap();

    assert!(!openapi_json.contains("common::HoldingInput"));
    assert!(openapi_json.contains("#/components/schemas/HoldingInput"));
}

#[test]
fn test_holding_input_schema_accepts_both_shapes() {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.as_ref().unwrap();
    let schema = components.schemas.get("HoldingInput").unwrap();

    if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::OneOf(one_of)) = schema {
        assert_eq!(one_of.items.len(), 2);
    } else {
        panic!("HoldingInput should be a oneOf schema");
    }
}
