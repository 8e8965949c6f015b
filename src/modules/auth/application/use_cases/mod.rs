pub mod revoke_token;
pub mod verify_token;
