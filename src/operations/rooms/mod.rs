mod detect_rooms;

pub use detect_rooms::{find_room_at, CandidateRoom, DetectRooms, MIN_ROOM_AREA};
