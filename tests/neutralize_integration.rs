//! Neutralization and setup-phase interplay, observed through full
//! exchange resolution rather than on the tag sets directly.

use emberclash::combat::Special;
use emberclash::core::config::EngineConfig;
use emberclash::core::types::{MoveKind, WeaponColor, WeaponKind};
use emberclash::duel::{
    preview_exchange, resolve_exchange, Combatant, Modifier, ModifierKind, ModifierScope,
    OpenField, ResolutionMode, StatKind, Stats, Weapon,
};

fn config() -> EngineConfig {
    EngineConfig::default()
}

fn grunt(atk: i32, spd: i32, def: i32, hp: i32) -> Combatant {
    Combatant::new(
        Stats {
            hp,
            max_hp: hp,
            atk,
            spd,
            def,
            res: def,
        },
        Weapon::new(WeaponKind::Dagger, WeaponColor::Colorless, false, 1),
        MoveKind::Infantry,
    )
}

fn acted(outcome: &emberclash::duel::CombatOutcome, id: emberclash::core::types::UnitId) -> bool {
    outcome.rounds.iter().any(|r| r.attacker_id == id)
}

#[test]
fn test_counterattack_tag_overrides_range_until_neutralized() {
    // Range 2 attacker into a range 1 defender: no counter by range
    let mut ranged = grunt(30, 20, 10, 40);
    ranged.weapon.range = 2;
    let mut defender = grunt(30, 20, 10, 40);

    let outcome = preview_exchange(&ranged, &defender, &OpenField, &config()).unwrap();
    assert!(!acted(&outcome, defender.id));

    // The counterattack tag puts the defender back into the sequence
    defender.tags.attach(Modifier::Counterattack);
    let outcome = preview_exchange(&ranged, &defender, &OpenField, &config()).unwrap();
    assert!(acted(&outcome, defender.id));

    // Pairwise: the attacker's prevention cancels it again, one for one
    let mut silencer = ranged.clone();
    silencer.tags.attach(Modifier::PreventCounterattack);
    let outcome = preview_exchange(&silencer, &defender, &OpenField, &config()).unwrap();
    assert!(!acted(&outcome, defender.id));
}

#[test]
fn test_pairwise_removal_is_one_for_one() {
    // Two counterattack tags against a single prevention: one survives
    let mut attacker = grunt(30, 20, 10, 40);
    attacker.weapon.range = 2;
    attacker.tags.attach(Modifier::PreventCounterattack);

    let mut defender = grunt(30, 20, 10, 40);
    defender.tags.attach(Modifier::Counterattack);
    defender.tags.attach(Modifier::Counterattack);

    let outcome = preview_exchange(&attacker, &defender, &OpenField, &config()).unwrap();
    assert!(acted(&outcome, defender.id));
}

#[test]
fn test_prevent_damage_reduction_strips_every_reduction_tag() {
    let build_defender = || {
        let mut defender = grunt(10, 20, 10, 40);
        defender.weapon.range = 2;
        defender.tags.attach(Modifier::DamageReduction {
            amount: 5,
            percent: 0,
            scope: ModifierScope::Persistent,
        });
        defender.tags.attach(Modifier::DamageReduction {
            amount: 0,
            percent: 50,
            scope: ModifierScope::Persistent,
        });
        defender
    };
    let attacker = grunt(40, 20, 10, 40);

    // Raw 30, halved to 15, minus flat 5
    let outcome = preview_exchange(&attacker, &build_defender(), &OpenField, &config()).unwrap();
    assert_eq!(outcome.rounds[0].damage_dealt, 10);

    // Many-to-one: one neutralizer strips both tags and is kept itself
    let mut piercer = attacker.clone();
    piercer.tags.attach(Modifier::PreventDamageReduction);
    let mut defender = build_defender();
    let outcome = resolve_exchange(
        &mut piercer,
        &mut defender,
        &OpenField,
        &config(),
        ResolutionMode::Commit,
    )
    .unwrap();
    assert_eq!(outcome.rounds[0].damage_dealt, 30);
    assert!(!defender.tags.has(ModifierKind::DamageReduction));
    assert!(piercer.tags.has(ModifierKind::PreventDamageReduction));
}

#[test]
fn test_neutralized_map_buffs_become_equal_debuffs() {
    let mut attacker = grunt(30, 20, 10, 40);
    let mut defender = grunt(30, 20, 25, 40);
    defender.tags.attach(Modifier::MapBuff {
        stat: StatKind::Atk,
        amount: 6,
    });

    // Buffed counter: (30 + 6) - 10
    let outcome = preview_exchange(&attacker, &defender, &OpenField, &config()).unwrap();
    assert_eq!(outcome.rounds[1].damage_dealt, 26);

    // Setup flips the buff into a -6 debuff before any round runs
    attacker.tags.attach(Modifier::NeutralizeMapBuffs);
    let outcome = resolve_exchange(
        &mut attacker,
        &mut defender,
        &OpenField,
        &config(),
        ResolutionMode::Commit,
    )
    .unwrap();
    assert_eq!(outcome.rounds[1].damage_dealt, 14);
    assert!(!defender.tags.has(ModifierKind::MapBuff));
    assert!(defender.tags.has(ModifierKind::CombatDebuff));
}

#[test]
fn test_guaranteed_affinity_until_neutralized() {
    // Red into blue: disadvantage, 40 * 0.8 = 32, minus def 10
    let mut attacker = grunt(40, 20, 10, 40);
    attacker.weapon = Weapon::new(WeaponKind::Sword, WeaponColor::Red, false, 1);
    let mut defender = grunt(10, 20, 10, 40);
    defender.weapon = Weapon::new(WeaponKind::Lance, WeaponColor::Blue, false, 1);

    let outcome = preview_exchange(&attacker, &defender, &OpenField, &config()).unwrap();
    assert_eq!(outcome.rounds[0].damage_dealt, 22);

    // Guaranteed affinity claws the 20% back: 40 * 1.0
    attacker.tags.attach(Modifier::GuaranteedAffinity);
    let outcome = preview_exchange(&attacker, &defender, &OpenField, &config()).unwrap();
    assert_eq!(outcome.rounds[0].damage_dealt, 30);

    // Defender's neutralizer cancels it pairwise
    defender.tags.attach(Modifier::NeutralizeAffinity);
    let outcome = preview_exchange(&attacker, &defender, &OpenField, &config()).unwrap();
    assert_eq!(outcome.rounds[0].damage_dealt, 22);
}

#[test]
fn test_accelerate_special_neutralized_pairwise() {
    let run = |defender_neutralizes: bool| {
        let mut attacker = grunt(30, 20, 10, 40);
        attacker.special = Some(Special::new("Aether", 3));
        attacker.tags.attach(Modifier::AccelerateSpecial);
        let mut defender = grunt(10, 20, 40, 40);
        defender.weapon.range = 2;
        if defender_neutralizes {
            defender.tags.attach(Modifier::NeutralizeAccelerateSpecial);
        }
        resolve_exchange(
            &mut attacker,
            &mut defender,
            &OpenField,
            &config(),
            ResolutionMode::Commit,
        )
        .unwrap();
        attacker.special.as_ref().unwrap().cooldown
    };

    assert_eq!(run(false), 1); // accelerated: 3 - 2
    assert_eq!(run(true), 2); // back to the default 3 - 1
}

#[test]
fn test_converted_prevention_source_feeds_neutralization() {
    // The defender marks the attacker with a prevention source; setup
    // converts it into PreventCounterattack on the attacker, which then
    // trades against the defender's own Counterattack tag.
    let attacker = grunt(30, 20, 10, 40);
    let mut defender = grunt(30, 20, 10, 40);
    defender.tags.attach(Modifier::CounterattackPreventionSource {
        beneficiary: attacker.id,
    });

    // Converted prevention alone silences the counter despite equal range
    let outcome = preview_exchange(&attacker, &defender, &OpenField, &config()).unwrap();
    assert!(!acted(&outcome, defender.id));

    // With a counterattack tag the pair cancels and range rules apply again
    defender.tags.attach(Modifier::Counterattack);
    let outcome = preview_exchange(&attacker, &defender, &OpenField, &config()).unwrap();
    assert!(acted(&outcome, defender.id));
}
