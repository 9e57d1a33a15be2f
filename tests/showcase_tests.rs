mod helpers;

use character_showcase::combat::{
    Battle, BattlePhase, Character, Combatant, Exchange, Progression, Report, Side, StrikeKind,
    Verdict,
};
use character_showcase::error::GameError;
use character_showcase::hero::{Class, Fighter, Mage, Warrior};
use character_showcase::{ShowcaseConfig, run_showcase};
use helpers::{dummy, rogue_rolling};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn warrior_report_matches_stat_table() {
    let warrior = Warrior::new("X");
    assert_eq!(
        warrior.report(),
        Report {
            name: "X".to_string(),
            health: 120,
            strength: 15,
            magic: 5,
            progression: Some(Progression {
                class: "Warrior".to_string(),
                level: 1,
                experience: 0,
            }),
        }
    );
}

#[test]
fn class_labels_are_preserved() {
    let labels: Vec<_> = [
        Class::Warrior.spawn("a", 0),
        Class::Mage.spawn("b", 0),
        Class::Rogue.spawn("c", 0),
    ]
    .iter()
    .map(|f| {
        let player = f.player();
        assert_eq!((player.level, player.experience), (1, 0));
        f.report().progression.map(|p| p.class)
    })
    .collect();
    assert_eq!(
        labels,
        vec![
            Some("Warrior".to_string()),
            Some("Mage".to_string()),
            Some("Rogue".to_string()),
        ]
    );
}

#[test]
fn warrior_beats_mage_in_single_exchange() {
    let mut warrior = Warrior::new("Sir Galahad");
    let mut mage = Mage::new("Merlin");

    let outcome = Battle::engage(&mut warrior, &mut mage);

    assert_eq!(outcome.strikes.len(), 2);
    assert_eq!(outcome.strikes[0].damage, 20);
    assert_eq!(outcome.strikes[0].kind, StrikeKind::Swing);
    assert_eq!(outcome.strikes[1].damage, 20);
    assert_eq!(outcome.strikes[1].kind, StrikeKind::Spell);
    assert_eq!(mage.health(), 60);
    assert_eq!(warrior.health(), 100);
    assert_eq!(
        outcome.verdict,
        Verdict::Winner {
            side: Side::First,
            name: "Sir Galahad".to_string(),
        }
    );
}

#[test]
fn non_critical_rogue_deals_plain_strength() {
    let mut rogue = rogue_rolling(9);
    let mut target = dummy(100);

    rogue.attack(&mut target);
    assert_eq!(target.health, 88);
}

#[test]
fn critical_rogue_deals_double_strength() {
    let mut rogue = rogue_rolling(3);
    let mut target = dummy(100);

    let strike = rogue.attack(&mut target);
    assert_eq!(strike.kind, StrikeKind::Critical);
    assert_eq!(target.health, 76);
}

#[test]
fn critical_opener_still_loses_to_warrior() {
    // 盗贼先手，暴击后对方仍存活并反击
    let mut rogue = rogue_rolling(1);
    let mut warrior = Warrior::new("Sir Galahad");

    let outcome = Battle::engage(&mut rogue, &mut warrior);
    assert_eq!(outcome.second.health, 96);
    assert_eq!(outcome.first.health, 70);
    assert_eq!(outcome.verdict.winner(), Some("Sir Galahad"));
}

#[test]
fn special_abilities_through_trait_objects() {
    let mut fighters: Vec<Box<dyn Fighter>> = vec![
        Box::new(Warrior::new("Sir Galahad")),
        Box::new(Mage::new("Merlin")),
        Box::new(rogue_rolling(10)),
    ];

    let dealt: Vec<u32> = fighters
        .iter_mut()
        .map(|f| {
            let mut enemy = dummy(50);
            f.special_ability(&mut enemy).damage
        })
        .collect();
    assert_eq!(dealt, vec![30, 30, 24]);
}

#[test]
fn exchange_can_be_stepped_by_hand() {
    let mut warrior = Warrior::new("Sir Galahad");
    let mut weak = Character::new("Weakling", 15, 50, 0);
    let mut exchange = Exchange::new(&mut warrior, &mut weak);

    exchange.step();
    assert_eq!(exchange.phase(), BattlePhase::FirstAttackerMoved);
    assert!(!exchange.second().is_alive());

    exchange.step();
    assert_eq!(exchange.phase(), BattlePhase::Complete);
    assert_eq!(exchange.strikes().len(), 1);
    assert_eq!(exchange.first().health(), 120);
}

#[test]
fn mage_always_answers_second() {
    let mut warrior = Warrior::new("Sir Galahad");
    let mut mage = Mage::new("Merlin");
    let strikes = Exchange::new(&mut warrior, &mut mage).finish();

    let attackers: Vec<_> = strikes.iter().map(|s| s.attacker.as_str()).collect();
    assert_eq!(attackers, vec!["Sir Galahad", "Merlin"]);
    assert_eq!(strikes[1].target, "Sir Galahad");
    assert_eq!((warrior.health(), mage.health()), (100, 60));
}

#[test]
fn identical_names_report_the_winning_side() {
    let mut warrior = Warrior::new("X");
    let mut mage = Mage::new("X");

    let outcome = Battle::engage(&mut mage, &mut warrior);
    assert_eq!(outcome.verdict.winner(), Some("X"));
    assert_eq!(outcome.verdict.winning_side(), Some(Side::Second));
}

#[test]
fn checked_inputs_reject_negative_values() {
    assert!(matches!(
        Character::try_new("Broken", 10, -1, 0),
        Err(GameError::InvalidArgument(_))
    ));

    let mut target = dummy(10);
    assert!(target.try_apply_damage(-1).is_err());
    assert_eq!(target.health, 10);
}

#[test]
fn reports_are_idempotent() {
    let mage = Mage::new("Merlin");
    let first = mage.report();
    assert_eq!(first, mage.report());
    assert_eq!(first, mage.report());
}

#[test]
fn same_seed_same_showcase() {
    let a = run_showcase(&ShowcaseConfig::from_seed(11));
    let b = run_showcase(&ShowcaseConfig::from_seed(11));
    assert_eq!(a.polymorphism, b.polymorphism);
    assert_eq!(a.battle, b.battle);
}

#[test]
fn showcase_dummy_is_healed_between_attacks() {
    let showcase = run_showcase(&ShowcaseConfig::default());
    let damages: Vec<u32> = showcase.polymorphism.iter().map(|s| s.damage).collect();
    assert_eq!(damages[0], 20);
    assert_eq!(damages[1], 20);
    assert!(damages[2] == 12 || damages[2] == 24);

    for strike in &showcase.polymorphism {
        assert_eq!(strike.remaining_health, 100 - strike.damage);
    }
}

proptest! {
    #[test]
    fn exchange_never_leaves_negative_health(
        h1 in 0u32..300, s1 in 0u32..100,
        h2 in 1u32..300, s2 in 0u32..100,
    ) {
        let mut a = Character::new("A", h1, s1, 0);
        let mut b = Character::new("B", h2, s2, 0);
        let outcome = Battle::engage(&mut a, &mut b);

        prop_assert_eq!(outcome.second.health, h2.saturating_sub(s1));
        if outcome.second.health == 0 {
            prop_assert_eq!(outcome.strikes.len(), 1);
            prop_assert_eq!(outcome.first.health, h1);
        } else {
            prop_assert_eq!(outcome.first.health, h1.saturating_sub(s2));
        }

        let expected = Verdict::decide(&outcome.first, &outcome.second);
        prop_assert_eq!(outcome.verdict, expected);
    }
}
