mod controller_actor;
mod conversion_client;
mod helpers;
