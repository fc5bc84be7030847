use super::Accessor;
use crate::error::Result;
use crate::model::{Dimensions, Furniture, Room};

/// Placeholder accessor standing in for a database.
///
/// Lookups return fixed data stamped with the requested id, listings return
/// two fixed entries, and writes echo their input. Nothing is retained.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureStore;

impl FixtureStore {
    pub fn new() -> Self {
        Self
    }
}

impl Accessor<Room> for FixtureStore {
    fn create(&self, room: Room) -> Result<Room> {
        Ok(room)
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<Room>> {
        tracing::debug!(id, "fixture room lookup");
        Ok(Some(Room::new(id, 10.0, 12.0, 20.0)))
    }

    fn fetch_all(&self) -> Result<Option<Vec<Room>>> {
        Ok(Some(vec![
            Room::new("1", 10.0, 12.0, 20.0),
            Room::new("2", 14.0, 2.0, 230.0),
        ]))
    }

    fn update(&self, id: &str, room: Room) -> Result<Room> {
        Ok(Room { id: id.to_string(), ..room })
    }

    fn delete(&self, _id: &str) -> Result<bool> {
        Ok(true)
    }
}

impl Accessor<Furniture> for FixtureStore {
    fn create(&self, furniture: Furniture) -> Result<Furniture> {
        Ok(furniture)
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<Furniture>> {
        tracing::debug!(id, "fixture furniture lookup");
        Ok(Some(Furniture::new(id, Dimensions::new(10.0, 12.0, 23.0), "1")))
    }

    fn fetch_all(&self) -> Result<Option<Vec<Furniture>>> {
        Ok(Some(vec![
            Furniture::new("1", Dimensions::new(10.2, 12.34, 21.23), "1"),
            Furniture::new("2", Dimensions::new(20.5, 54.23, 23.25), "1"),
        ]))
    }

    fn update(&self, id: &str, furniture: Furniture) -> Result<Furniture> {
        Ok(Furniture {
            id: id.to_string(),
            ..furniture
        })
    }

    fn delete(&self, _id: &str) -> Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_carries_requested_id() {
        let store = FixtureStore::new();
        let room: Option<Room> = store.fetch_by_id("321").unwrap();
        assert_eq!(room, Some(Room::new("321", 10.0, 12.0, 20.0)));

        let furniture: Option<Furniture> = store.fetch_by_id("8").unwrap();
        let furniture = furniture.unwrap();
        assert_eq!(furniture.id, "8");
        assert_eq!(furniture.room_id, "1");
    }

    #[test]
    fn test_writes_echo_input() {
        let store = FixtureStore::new();
        let room = Room::new("123", 5.55, 15.99, 25.001);
        assert_eq!(Accessor::<Room>::create(&store, room.clone()).unwrap(), room);

        let updated = Accessor::<Room>::update(&store, "9", room).unwrap();
        assert_eq!(updated.id, "9");
        assert!(Accessor::<Room>::delete(&store, "9").unwrap());
    }

    #[test]
    fn test_listings_have_two_entries() {
        let store = FixtureStore::new();
        let rooms: Option<Vec<Room>> = store.fetch_all().unwrap();
        assert_eq!(rooms.map(|r| r.len()), Some(2));
        let furniture: Option<Vec<Furniture>> = store.fetch_all().unwrap();
        assert_eq!(furniture.map(|f| f.len()), Some(2));
    }
}
