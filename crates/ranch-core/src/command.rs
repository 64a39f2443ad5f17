//! The player-facing command surface.
//!
//! Hosts parse their own command syntax and hand this module a typed
//! [`FarmSubcommand`]. Replies carry display text, a machine-readable
//! outcome, and an optional teleport destination for the host to
//! perform.

use std::path::Path;

use tracing::info;

use ranch_economy::InventoryHost;
use ranch_types::{OwnerId, Profession, WorldPoint};
use ranch_world::{FarmRegistry, WorldEditor};

use crate::context::RanchContext;

/// A parsed `/farm` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmSubcommand {
    /// Create the caller's farm island.
    Create,
    /// Teleport home to the caller's farm.
    Home,
    /// Show the caller's farm gauges.
    Info,
    /// Trust another owner to build on the caller's farm.
    Trust(OwnerId),
    /// Revoke another owner's build access.
    Untrust(OwnerId),
    /// Visit another owner's farm.
    Visit(OwnerId),
    /// Teleport to the market.
    Market,
    /// Show command help.
    Help,
}

/// Machine-readable outcome of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command did what was asked.
    Success,
    /// The caller has no farm yet.
    FarmMissing,
    /// The caller already has a farm.
    AlreadyExists,
    /// The named owner has no farm.
    TargetNotFound,
    /// The caller is not trusted on the target farm.
    NotTrusted,
    /// The operation was aborted by a world failure.
    Aborted,
}

/// A command's reply to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandReply {
    /// Text to show the caller.
    pub text: String,
    /// The machine-readable outcome.
    pub outcome: CommandOutcome,
    /// Where to teleport the caller, if anywhere.
    pub teleport: Option<WorldPoint>,
}

impl CommandReply {
    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: CommandOutcome::Success,
            teleport: None,
        }
    }

    fn teleport_to(text: impl Into<String>, destination: WorldPoint) -> Self {
        Self {
            text: text.into(),
            outcome: CommandOutcome::Success,
            teleport: Some(destination),
        }
    }

    fn failure(text: impl Into<String>, outcome: CommandOutcome) -> Self {
        Self {
            text: text.into(),
            outcome,
            teleport: None,
        }
    }
}

/// Host collaborators a command dispatch may need.
pub struct CommandHost<'a> {
    /// The world editor used for farm creation.
    pub editor: &'a mut dyn WorldEditor,
    /// The caller's inventory.
    pub inventory: &'a mut dyn InventoryHost,
    /// The farm island schematic to paste.
    pub farm_schematic: &'a Path,
}

/// Dispatch one `/farm` subcommand for `caller`.
pub fn dispatch_farm_command(
    context: &mut RanchContext,
    caller: OwnerId,
    command: FarmSubcommand,
    host: &mut CommandHost<'_>,
) -> CommandReply {
    match command {
        FarmSubcommand::Create => create(context, caller, host),
        FarmSubcommand::Home => home(context, caller),
        FarmSubcommand::Info => info_reply(context, caller),
        FarmSubcommand::Trust(target) => trust(context, caller, target),
        FarmSubcommand::Untrust(target) => untrust(context, caller, target),
        FarmSubcommand::Visit(target) => visit(context, caller, target),
        FarmSubcommand::Market => CommandReply::teleport_to(
            "Welcome to the market!",
            context.market_spawn.clone(),
        ),
        FarmSubcommand::Help => CommandReply::success(HELP_TEXT),
    }
}

/// Assign a profession to `owner` and grant its starter kit.
pub fn choose_profession(
    context: &mut RanchContext,
    owner: OwnerId,
    profession: Profession,
    inventory: &mut dyn InventoryHost,
) -> CommandReply {
    context.professions.set_profession(owner, profession, inventory);
    CommandReply::success(format!(
        "You are now a {}. Your starter kit has been delivered.",
        profession.display_name()
    ))
}

const HELP_TEXT: &str = "Farm commands:\n\
    /farm create - claim your own farm island\n\
    /farm home - teleport to your farm\n\
    /farm info - show your farm's condition\n\
    /farm trust <owner> - let someone build on your farm\n\
    /farm untrust <owner> - revoke build access\n\
    /farm visit <owner> - visit a farm you are trusted on\n\
    /farm market - teleport to the market";

fn create(
    context: &mut RanchContext,
    caller: OwnerId,
    host: &mut CommandHost<'_>,
) -> CommandReply {
    match context.create_farm(caller, host.editor, host.inventory, host.farm_schematic) {
        Ok(creation) if creation.created => CommandReply::teleport_to(
            "Your farm is ready! Welcome home.",
            home_for(&context.farms, caller).unwrap_or(creation.center),
        ),
        Ok(_) => CommandReply::failure(
            "You already have a farm. Try /farm home.",
            CommandOutcome::AlreadyExists,
        ),
        Err(error) => {
            info!(%caller, %error, "farm creation aborted");
            CommandReply::failure(
                "The farm could not be built right now. Try again later.",
                CommandOutcome::Aborted,
            )
        }
    }
}

fn home(context: &RanchContext, caller: OwnerId) -> CommandReply {
    home_for(&context.farms, caller).map_or_else(
        || {
            CommandReply::failure(
                "You have no farm yet. Try /farm create.",
                CommandOutcome::FarmMissing,
            )
        },
        |destination| CommandReply::teleport_to("Welcome home!", destination),
    )
}

fn info_reply(context: &RanchContext, caller: OwnerId) -> CommandReply {
    let Some(farm) = context.farms.farm(caller) else {
        return CommandReply::failure(
            "You have no farm yet. Try /farm create.",
            CommandOutcome::FarmMissing,
        );
    };
    let profession = context
        .professions
        .profession(caller)
        .map_or("none", Profession::display_name);
    CommandReply::success(format!(
        "Profession: {profession}\nUpkeep: {:.1}\nCrop health: {:.1}\nAnimal health: {:.1}\nWeeds: {}\nTrusted: {}",
        farm.upkeep(),
        farm.crop_health(),
        farm.animal_health(),
        farm.weed_count(),
        farm.trusted().len()
    ))
}

fn trust(context: &mut RanchContext, caller: OwnerId, target: OwnerId) -> CommandReply {
    let Some(farm) = context.farms.farm_mut(caller) else {
        return CommandReply::failure(
            "You have no farm yet. Try /farm create.",
            CommandOutcome::FarmMissing,
        );
    };
    if farm.trust(target) {
        CommandReply::success("They can now build on your farm.")
    } else {
        CommandReply::success("They could already build on your farm.")
    }
}

fn untrust(context: &mut RanchContext, caller: OwnerId, target: OwnerId) -> CommandReply {
    let Some(farm) = context.farms.farm_mut(caller) else {
        return CommandReply::failure(
            "You have no farm yet. Try /farm create.",
            CommandOutcome::FarmMissing,
        );
    };
    if farm.untrust(target) {
        CommandReply::success("Their build access has been revoked.")
    } else {
        CommandReply::success("They were not trusted on your farm.")
    }
}

fn visit(context: &RanchContext, caller: OwnerId, target: OwnerId) -> CommandReply {
    let Some(farm) = context.farms.farm(target) else {
        return CommandReply::failure(
            "That owner has no farm.",
            CommandOutcome::TargetNotFound,
        );
    };
    if !farm.is_trusted(caller) {
        return CommandReply::failure(
            "You are not trusted on that farm.",
            CommandOutcome::NotTrusted,
        );
    }
    CommandReply::teleport_to("Enjoy your visit!", FarmRegistry::home_point(farm))
}

fn home_for(farms: &FarmRegistry, owner: OwnerId) -> Option<WorldPoint> {
    farms.farm(owner).map(FarmRegistry::home_point)
}
