use crate::traits::Serializer;
use flexboard_core::{KanbanError, KanbanResult};

/// Compact JSON, matching the snapshot layout other clients of the slot
/// expect (a bare array of task records).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>> {
        serde_json::to_vec(data).map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T> {
        serde_json::from_slice(bytes).map_err(|e| KanbanError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexboard_domain::Task;

    #[test]
    fn test_tasks_serialize_as_bare_array() {
        let tasks = vec![Task::new("Buy tiles", "").unwrap()];
        let bytes = JsonSerializer.serialize(&tasks).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with('['));
        assert!(text.contains("\"desc\":\"\""));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_wrong_shape_is_a_serialization_error() {
        let result: KanbanResult<Vec<Task>> = JsonSerializer.deserialize(b"{\"tasks\":[]}");
        assert!(matches!(result, Err(KanbanError::Serialization(_))));

        let result: KanbanResult<Vec<Task>> = JsonSerializer.deserialize(b"null");
        assert!(result.is_err());
    }
}
