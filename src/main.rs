//! Emberclash - demo entry point
//!
//! Resolves a handful of canonical exchanges and prints the round logs,
//! plus a JSON dump of the last outcome for tooling.

use emberclash::combat::Special;
use emberclash::core::config::EngineConfig;
use emberclash::core::error::Result;
use emberclash::core::types::TilePos;
use emberclash::duel::{
    preview_exchange, resolve_exchange, Combatant, GridTerrain, Modifier, ResolutionMode,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("emberclash=debug")
        .init();

    tracing::info!("Emberclash demo starting");

    let config = EngineConfig::default();
    let mut terrain = GridTerrain::new();
    terrain.mark_defensive(TilePos::new(3, 3));

    println!("\n=== EMBERCLASH ===");
    println!("Deterministic combat exchange resolution\n");

    // Duel 1: red sword into blue armor - disadvantage, slow defender
    let mut sword = Combatant::test_sword_fighter();
    let mut lancer = Combatant::test_armored_lancer();
    println!("-- sword {} vs armored lance {} --", sword.id, lancer.id);
    let outcome = resolve_exchange(
        &mut sword,
        &mut lancer,
        &terrain,
        &config,
        ResolutionMode::Commit,
    )?;
    println!("{outcome}\n");

    // Duel 2: green tome into red sword on a fort tile - advantage vs
    // scaled defense, no counter at range 2
    let mut mage = Combatant::test_green_mage();
    let mut defender = Combatant::test_sword_fighter().at(TilePos::new(3, 3));
    println!("-- green tome {} vs sword {} on a fort --", mage.id, defender.id);
    let outcome = resolve_exchange(
        &mut mage,
        &mut defender,
        &terrain,
        &config,
        ResolutionMode::Commit,
    )?;
    println!("{outcome}\n");

    // Duel 3: brave sword with a charged special, previewed first
    let mut brave = Combatant::test_sword_fighter();
    brave.weapon.brave = true;
    let mut special = Special::new("Glimmer", 2);
    special.set_cooldown(0);
    brave = brave.with_special(special);
    brave.special_hooks.triggers_on_attack = true;
    brave.special_hooks.on_trigger = Some(|ctx| {
        ctx.draft.damage_increase_percent += 50;
    });
    brave.tags.attach(Modifier::GuaranteedFollowUp);

    let mut foe = Combatant::test_armored_lancer();
    println!("-- brave sword {} vs armored lance {} --", brave.id, foe.id);

    let preview = preview_exchange(&brave, &foe, &terrain, &config)?;
    println!("preview: {} rounds, kill = {}", preview.rounds.len(), preview.kill);

    let outcome = resolve_exchange(
        &mut brave,
        &mut foe,
        &terrain,
        &config,
        ResolutionMode::Commit,
    )?;
    println!("{outcome}\n");

    // Duel 4: staff into sword - halved damage unless normalized
    let mut cleric = Combatant::test_staff_cleric();
    cleric.tags.attach(Modifier::StaffDamageNormalize);
    let mut target = Combatant::test_sword_fighter();
    println!("-- staff {} vs sword {} --", cleric.id, target.id);
    let outcome = resolve_exchange(
        &mut cleric,
        &mut target,
        &terrain,
        &config,
        ResolutionMode::Commit,
    )?;
    println!("{outcome}\n");

    println!("last outcome as JSON:");
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    tracing::info!("Emberclash demo finished");
    Ok(())
}
