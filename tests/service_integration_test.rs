use blood_compat::{health, service_info, CatalogError, QueryService};

#[test]
fn test_list_blood_types_json_contract() {
    let service = QueryService::new();

    let json = serde_json::to_value(service.list_blood_types()).unwrap();
    let records = json.as_array().unwrap();

    assert_eq!(records.len(), 8);
    for record in records {
        let obj = record.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj["id"].is_u64());
        assert!(obj["type"].is_string());
        assert!(obj["can_donate_to"].is_array());
        assert!(obj["can_receive_from"].is_array());
    }

    // Catalog order is id order.
    let ids: Vec<u64> = records.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_o_negative_full_record() {
    let service = QueryService::new();

    let json = serde_json::to_value(service.get_blood_type("O-").unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 8,
            "type": "O-",
            "can_donate_to": ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"],
            "can_receive_from": ["O-"]
        })
    );
}

#[test]
fn test_regional_distribution_json_contract() {
    let service = QueryService::new();

    let json = serde_json::to_value(service.get_regional_distribution("israel").unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "region": "Israel",
            "population": 8_323_659,
            "distribution": {
                "A+": 34.0,
                "A-": 4.0,
                "B+": 17.0,
                "B-": 2.0,
                "AB+": 7.0,
                "AB-": 1.0,
                "O+": 32.0,
                "O-": 3.0
            }
        })
    );
}

#[test]
fn test_compatibility_matrix_json_contract() {
    let service = QueryService::new();

    let json = serde_json::to_value(service.compatibility_matrix()).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 8);
    for (label, entry) in obj {
        let entry = entry.as_object().unwrap();
        assert_eq!(entry.len(), 2, "unexpected fields for {}", label);

        let source = service.get_blood_type(label).unwrap();
        assert_eq!(
            entry["can_donate_to"],
            serde_json::json!(source.can_donate_to)
        );
        assert_eq!(
            entry["can_receive_from"],
            serde_json::json!(source.can_receive_from)
        );
    }
}

#[test]
fn test_not_found_maps_to_404_detail_body() {
    let service = QueryService::new();

    let err = service.get_blood_type("Z+").unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(
        serde_json::to_value(err.detail()).unwrap(),
        serde_json::json!({"detail": "Blood type 'Z+' not found"})
    );

    let err = service.get_regional_distribution("mars").unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(
        serde_json::to_value(err.detail()).unwrap(),
        serde_json::json!({"detail": "Regional data for 'mars' not found"})
    );
}

#[test]
fn test_region_error_keeps_requested_casing() {
    let service = QueryService::new();

    let err = service.get_regional_distribution("MARS").unwrap_err();
    assert_eq!(
        err,
        CatalogError::RegionNotFound {
            region: "MARS".to_string()
        }
    );
}

#[test]
fn test_root_and_health_payloads() {
    assert_eq!(
        serde_json::to_value(service_info()).unwrap(),
        serde_json::json!({"message": "Welcome to the Blood Donation Awareness API"})
    );
    assert_eq!(
        serde_json::to_value(health()).unwrap(),
        serde_json::json!({"status": "healthy"})
    );
}

#[test]
fn test_service_is_shareable_across_threads() {
    let service = QueryService::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let label = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"][i];
                service.get_blood_type(label).unwrap().id
            })
        })
        .collect();

    let mut ids: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}
