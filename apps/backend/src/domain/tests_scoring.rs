use crate::domain::score_sheet::{ScoreEntry, ScoreSheet};
use crate::domain::scoring::{
    apply_accrual, compute_round, edit_round, placement_award, PlayerDelta, RecordedScore,
    RosterEntry,
};

fn alice_bob_carol() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(1, "Alice", 2),
        RosterEntry::new(2, "Bob", 0),
        RosterEntry::new(3, "Carol", 5),
    ]
}

#[test]
fn scoring_three_player_round_places_by_adjusted_score() {
    let sheet = ScoreSheet::new()
        .with_entry(1, ScoreEntry::new(54))
        .with_entry(2, ScoreEntry::new(58))
        .with_entry(3, ScoreEntry::new(50));

    let result = compute_round(&alice_bob_carol(), &sheet);

    let order: Vec<&str> = result.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, ["Carol", "Alice", "Bob"]);

    let carol = result.row_for(3).unwrap();
    assert_eq!((carol.adjusted_score, carol.placement), (45, 1));
    let alice = result.row_for(1).unwrap();
    assert_eq!((alice.adjusted_score, alice.placement), (52, 2));
    let bob = result.row_for(2).unwrap();
    assert_eq!((bob.adjusted_score, bob.placement), (58, 3));

    let deltas = apply_accrual(&result);
    let by_id = |id: i64| *deltas.iter().find(|d| d.player_id == id).unwrap();
    assert_eq!((by_id(3).points, by_id(3).handicap), (3, -1));
    assert_eq!((by_id(1).points, by_id(1).handicap), (2, 0));
    assert_eq!((by_id(2).points, by_id(2).handicap), (1, 1));
}

#[test]
fn scoring_missing_raw_score_counts_as_zero() {
    let sheet = ScoreSheet::new()
        .with_entry(1, ScoreEntry::new(54))
        .with_entry(3, ScoreEntry::new(50));

    let result = compute_round(&alice_bob_carol(), &sheet);

    let bob = result.row_for(2).unwrap();
    assert_eq!(bob.raw_score, 0);
    assert_eq!(bob.adjusted_score, 0);
    assert_eq!(bob.placement, 1);
    assert_eq!(result.len(), 3);
}

#[test]
fn scoring_tie_goes_to_first_listed_player() {
    let roster = vec![
        RosterEntry::new(7, "Dana", 0),
        RosterEntry::new(4, "Eli", 2),
        RosterEntry::new(9, "Finn", 1),
    ];
    let sheet = ScoreSheet::new()
        .with_entry(7, ScoreEntry::new(50))
        .with_entry(4, ScoreEntry::new(52))
        .with_entry(9, ScoreEntry::new(60));

    let result = compute_round(&roster, &sheet);

    assert_eq!(result.row_for(7).unwrap().placement, 1);
    assert_eq!(result.row_for(4).unwrap().placement, 2);
    assert_eq!(result.row_for(9).unwrap().placement, 3);

    // Reversing the roster order flips the tie.
    let reversed: Vec<RosterEntry> = roster.into_iter().rev().collect();
    let result = compute_round(&reversed, &sheet);
    assert_eq!(result.row_for(4).unwrap().placement, 1);
    assert_eq!(result.row_for(7).unwrap().placement, 2);
}

#[test]
fn scoring_adjusted_score_can_be_negative() {
    let roster = vec![RosterEntry::new(1, "Scratch", 10)];
    let sheet = ScoreSheet::new().with_entry(1, ScoreEntry::new(4));

    let result = compute_round(&roster, &sheet);
    assert_eq!(result.rows[0].adjusted_score, -6);
    assert_eq!(result.rows[0].handicap_used, 10);
}

#[test]
fn scoring_empty_roster_yields_empty_round() {
    let result = compute_round(&[], &ScoreSheet::new());
    assert!(result.is_empty());
    assert!(apply_accrual(&result).is_empty());
}

#[test]
fn scoring_ignores_entries_for_unlisted_players() {
    let roster = vec![RosterEntry::new(1, "Alice", 0)];
    let sheet = ScoreSheet::new()
        .with_entry(1, ScoreEntry::new(50))
        .with_entry(99, ScoreEntry::new(10));

    let result = compute_round(&roster, &sheet);
    assert_eq!(result.len(), 1);
    assert!(result.row_for(99).is_none());
}

#[test]
fn accrual_table_by_placement() {
    assert_eq!(placement_award(1), (3, -1));
    assert_eq!(placement_award(2), (2, 0));
    assert_eq!(placement_award(3), (1, 1));
    assert_eq!(placement_award(4), (0, 0));
    assert_eq!(placement_award(12), (0, 0));
}

#[test]
fn accrual_bonuses_count_regardless_of_placement() {
    let roster: Vec<RosterEntry> = (1..=5)
        .map(|id| RosterEntry::new(id, format!("P{id}"), 0))
        .collect();
    let sheet = ScoreSheet::new()
        .with_entry(1, ScoreEntry::new(50))
        .with_entry(2, ScoreEntry::new(51))
        .with_entry(3, ScoreEntry::new(52))
        .with_entry(4, ScoreEntry::new(53))
        .with_entry(
            5,
            ScoreEntry::new(60).with_c2(3).with_ctp(true).with_ace(true),
        );

    let deltas = apply_accrual(&compute_round(&roster, &sheet));
    let last = deltas.iter().find(|d| d.player_id == 5).unwrap();

    assert_eq!(
        *last,
        PlayerDelta {
            player_id: 5,
            points: 0,
            handicap: 0,
            c2: 3,
            ctp: 1,
            ace: 1,
        }
    );
    let fourth = deltas.iter().find(|d| d.player_id == 4).unwrap();
    assert_eq!((fourth.points, fourth.handicap), (0, 0));
}

#[test]
fn edit_uses_recorded_handicap_not_live_one() {
    // Alice was recorded at handicap 2; her live handicap is irrelevant here.
    let existing = vec![
        RecordedScore {
            player_id: 1,
            name: "Alice".into(),
            handicap_used: 2,
        },
        RecordedScore {
            player_id: 2,
            name: "Bob".into(),
            handicap_used: 0,
        },
    ];
    let sheet = ScoreSheet::new()
        .with_entry(1, ScoreEntry::new(55))
        .with_entry(2, ScoreEntry::new(54));

    let result = edit_round(&existing, &sheet);

    let alice = result.row_for(1).unwrap();
    assert_eq!(alice.handicap_used, 2);
    assert_eq!(alice.adjusted_score, 53);
    assert_eq!(alice.placement, 1);
    assert_eq!(result.row_for(2).unwrap().placement, 2);
}

#[test]
fn edit_only_scores_existing_rows() {
    let existing = vec![RecordedScore {
        player_id: 1,
        name: "Alice".into(),
        handicap_used: 0,
    }];
    let sheet = ScoreSheet::new()
        .with_entry(1, ScoreEntry::new(50))
        .with_entry(2, ScoreEntry::new(40));

    let result = edit_round(&existing, &sheet);
    assert_eq!(result.len(), 1);
    assert_eq!(result.rows[0].player_id, 1);
}

#[test]
fn compute_round_is_repeatable() {
    let sheet = ScoreSheet::new()
        .with_entry(1, ScoreEntry::new(54).with_c2(1))
        .with_entry(2, ScoreEntry::new(58).with_ace(true))
        .with_entry(3, ScoreEntry::new(50));

    let first = compute_round(&alice_bob_carol(), &sheet);
    let second = compute_round(&alice_bob_carol(), &sheet);
    assert_eq!(first, second);
}

#[test]
fn accrual_never_lowers_c2_total() {
    let roster = vec![RosterEntry::new(1, "Alice", 0)];
    let sheet = ScoreSheet::new().with_entry(
        1,
        ScoreEntry {
            raw_score: 50,
            c2: -3,
            ctp: false,
            ace: false,
        },
    );

    let deltas = apply_accrual(&compute_round(&roster, &sheet));
    assert_eq!(deltas[0].c2, 0);
}

#[test]
fn scoring_adjusted_score_saturates_at_extremes() {
    let roster = vec![
        RosterEntry::new(1, "Alice", 5),
        RosterEntry::new(2, "Bob", -5),
    ];
    let sheet = ScoreSheet::new()
        .with_entry(1, ScoreEntry::new(i32::MIN))
        .with_entry(2, ScoreEntry::new(i32::MAX));

    let result = compute_round(&roster, &sheet);

    assert_eq!(result.row_for(1).unwrap().adjusted_score, i32::MIN);
    assert_eq!(result.row_for(2).unwrap().adjusted_score, i32::MAX);
    assert_eq!(result.row_for(1).unwrap().placement, 1);
}
