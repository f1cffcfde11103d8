//! Room command handlers.

use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_core::{
    Command as CoreCommand, CommandResult, PropertySession, Room, RoomRequest, RoomStatus,
    RoomType, TabId,
};

use crate::cli::{GlobalOpts, OutputFormat, RoomFields, RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Type")]
    room_type: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Occupancy")]
    occupancy: i64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Bookable")]
    bookable: String,
}

impl From<&Room> for RoomRow {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id,
            number: r.room_number.clone(),
            room_type: r.room_type.to_string(),
            price: format!("{:.2}", r.base_price),
            occupancy: r.max_occupancy,
            status: r.status.to_string(),
            bookable: crate::output::yes_no(r.bookable),
        }
    }
}

/// Render the session's room slice in the chosen format.
pub fn render(session: &PropertySession, format: &OutputFormat) -> String {
    let rooms: Vec<Room> = session.rooms().iter().map(|r| (**r).clone()).collect();
    output::render_list(format, &rooms, RoomRow::from, |r| r.id.to_string())
}

fn to_request(fields: RoomFields) -> RoomRequest {
    // Unrecognized type/status strings ride along as `Other`; the
    // backend is the authority on what it accepts.
    let room_type = fields
        .room_type
        .parse()
        .unwrap_or_else(|_| RoomType::Other(fields.room_type.clone()));
    let status = fields
        .status
        .parse()
        .unwrap_or_else(|_| RoomStatus::Other(fields.status.clone()));
    RoomRequest {
        room_number: fields.number,
        room_type,
        base_price: fields.price,
        max_occupancy: fields.occupancy,
        status,
        active: fields.active,
        bookable: fields.bookable,
        amenity_ids: fields.amenities.unwrap_or_default(),
    }
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: RoomsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RoomsCommand::List { property } => {
            let session = util::open_session(client, &property).await?;
            session.ensure_loaded(TabId::Rooms).await?;
            output::print_output(&render(&session, &global.output), global.quiet);
            Ok(())
        }

        RoomsCommand::Create { property, fields } => {
            let session = util::open_session(client, &property).await?;
            let result = session
                .execute(CoreCommand::CreateRoom(to_request(fields)))
                .await?;
            if !global.quiet {
                if let CommandResult::Room(room) = result {
                    eprintln!("Room '{}' created with id {}", room.room_number, room.id);
                } else {
                    eprintln!("Room created");
                }
            }
            Ok(())
        }

        RoomsCommand::Update {
            property,
            room_id,
            fields,
        } => {
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::UpdateRoom {
                    room_id,
                    request: to_request(fields),
                })
                .await?;
            if !global.quiet {
                eprintln!("Room {room_id} updated");
            }
            Ok(())
        }

        RoomsCommand::Delete { property, room_id } => {
            if !util::confirm(&format!("Delete room {room_id}?"), global.yes)? {
                return Ok(());
            }
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::DeleteRoom { room_id })
                .await?;
            if !global.quiet {
                eprintln!("Room {room_id} deleted");
            }
            Ok(())
        }
    }
}
