pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn ack_serializes_as_msg_object() {
        let ack = types::Ack::new("Mash recipe added");
        let v = serde_json::to_value(&ack).unwrap();
        assert_eq!(v, serde_json::json!({"msg": "Mash recipe added"}));
    }
}
