//! Black-box allocation scenarios, expressed in the JSON request/plan shapes.

use shipplan_allocator::{AllocationRequest, OrderRequest, ShipmentPlan, Warehouse, allocate};

fn plan_json(request: &str) -> String {
    let request = AllocationRequest::from_json(request).expect("request should decode");
    let plan = request.allocate();
    if let Some(order) = &request.order {
        plan.verify_against(order).expect("plan should satisfy its order");
    }
    serde_json::to_string(&plan).expect("plan should encode")
}

fn expected(plan: &str) -> String {
    let plan: ShipmentPlan = serde_json::from_str(plan).expect("expected plan should decode");
    serde_json::to_string(&plan).unwrap()
}

#[test]
fn exact_match() {
    let got = plan_json(
        r#"{"order": {"apple": 1},
            "warehouses": [{"name": "owd", "inventory": {"apple": 1}}]}"#,
    );
    assert_eq!(got, expected(r#"[{"owd": {"apple": 1}}]"#));
}

#[test]
fn not_enough_inventory() {
    let got = plan_json(
        r#"{"order": {"apple": 1},
            "warehouses": [{"name": "owd", "inventory": {"apple": 0}}]}"#,
    );
    assert_eq!(got, "[]");
}

#[test]
fn split_across_warehouses() {
    let got = plan_json(
        r#"{"order": {"apple": 10},
            "warehouses": [
                {"name": "owd", "inventory": {"apple": 5}},
                {"name": "dm", "inventory": {"apple": 5}}
            ]}"#,
    );
    assert_eq!(got, expected(r#"[{"owd": {"apple": 5}}, {"dm": {"apple": 5}}]"#));
}

#[test]
fn empty_order() {
    let got = plan_json(
        r#"{"order": {},
            "warehouses": [{"name": "owd", "inventory": {"apple": 1}}]}"#,
    );
    assert_eq!(got, "[]");
}

#[test]
fn empty_warehouses() {
    assert_eq!(plan_json(r#"{"order": {"apple": 1}, "warehouses": []}"#), "[]");
}

#[test]
fn empty_order_and_warehouses() {
    assert_eq!(plan_json(r#"{"order": {}, "warehouses": []}"#), "[]");
}

#[test]
fn absent_order_and_warehouses() {
    assert_eq!(plan_json(r#"{"order": null, "warehouses": null}"#), "[]");
    assert!(allocate(None, None).is_empty());
}

#[test]
fn all_zero_order() {
    let got = plan_json(
        r#"{"order": {"apple": 0, "orange": 0, "pikachu": 0},
            "warehouses": [
                {"name": "owd", "inventory": {"apple": 5}},
                {"name": "dm", "inventory": {"orange": 5, "pikachu": 100}}
            ]}"#,
    );
    assert_eq!(got, "[]");
}

#[test]
fn unmatched_item_is_dropped() {
    let got = plan_json(
        r#"{"order": {"apple": 2, "pikachu": 1},
            "warehouses": [
                {"name": "owd", "inventory": {"apple": 5}},
                {"name": "dm", "inventory": {"orange": 5}}
            ]}"#,
    );
    assert_eq!(got, expected(r#"[{"owd": {"apple": 2}}]"#));
}

#[test]
fn skips_warehouses_without_matching_stock() {
    let got = plan_json(
        r#"{"order": {"apple": 10, "pikachu": 3, "soccer ball": 2},
            "warehouses": [
                {"name": "juventus", "inventory": {"apple": 0, "pear": 10}},
                {"name": "barcelona", "inventory": {"apple": 5, "soccer ball": 2}},
                {"name": "real madrid", "inventory": {"apple": 2}},
                {"name": "chelsea", "inventory": {"apple": 0, "pikachu": 4}},
                {"name": "arsenal", "inventory": {"banana": 0}},
                {"name": "liverpool", "inventory": {"apple": 6}}
            ]}"#,
    );
    assert_eq!(
        got,
        expected(
            r#"[
                {"barcelona": {"apple": 5, "soccer ball": 2}},
                {"real madrid": {"apple": 2}},
                {"chelsea": {"pikachu": 3}},
                {"liverpool": {"apple": 3}}
            ]"#
        )
    );
}

#[test]
fn partially_stocked_lines_finish_in_later_warehouse() {
    let got = plan_json(
        r#"{"order": {"apple": 10, "pikachu": 7},
            "warehouses": [
                {"name": "canada", "inventory": {"apple": 3, "pikachu": 5}},
                {"name": "usa", "inventory": {"apple": 20, "pikachu": 0}},
                {"name": "korea", "inventory": {"apple": 2}}
            ]}"#,
    );
    assert_eq!(
        got,
        expected(r#"[{"canada": {"apple": 3, "pikachu": 5}}, {"usa": {"apple": 7}}]"#)
    );
}

#[test]
fn typed_api_matches_json_api() {
    let order: OrderRequest = [("apple", 10), ("pikachu", 7)].into_iter().collect();
    let warehouses = vec![
        Warehouse::new("canada", [("apple", 3), ("pikachu", 5)].into_iter().collect()),
        Warehouse::new("usa", [("apple", 20), ("pikachu", 0)].into_iter().collect()),
        Warehouse::new("korea", [("apple", 2)].into_iter().collect()),
    ];

    let plan = allocate(Some(&order), Some(warehouses.as_slice()));
    let names: Vec<&str> = plan.warehouse_names().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["canada", "usa"]);
    assert_eq!(plan.shipped("pikachu"), 5);

    let report = plan.fulfillment(&order);
    assert_eq!(report[1].unfulfilled(), 2);
}
