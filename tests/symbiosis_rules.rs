use shoal::Species::*;
use shoal::{World, Yields};

#[test]
fn massive_school_extends_range_to_a_fixed_point() {
    // Three schooling mackerel each see two peers, hitting the cap.
    let world = World::new([Mackerel, Mackerel, Mackerel]);
    for tile in 0..3 {
        assert_eq!(world.effective_range(tile).unwrap(), 4);
    }

    let lone = World::new([Mackerel]);
    assert_eq!(lone.effective_range(0).unwrap(), 2);

    // One peer: +1 range, and the wider window finds nobody new.
    let pair = World::new([Mackerel, Mackerel]);
    assert_eq!(pair.effective_range(0).unwrap(), 3);
    assert_eq!(pair.effective_range(1).unwrap(), 3);
}

#[test]
fn massive_school_changes_range_but_not_yield() {
    let world = World::new([Mackerel, Mackerel, Mackerel]);
    assert_eq!(world.own_yield(1).unwrap(), Yields::food(2));
    // The broadcast window uses the final computed range.
    let area = world.area_yields(1, true).unwrap();
    assert_eq!(area.len(), 2 * 4 + 1);
}

#[test]
fn coral_dweller_wants_an_adjacent_clownfish_or_parrotfish() {
    let world = World::new([Clownfish, Parrotfish]);
    assert_eq!(world.own_yield(0).unwrap(), Yields::wealth(4));

    let wrong_neighbor = World::new([Clownfish, Mackerel]);
    assert_eq!(wrong_neighbor.own_yield(0).unwrap(), Yields::wealth(2));

    // Two tiles away is out of reach: the rule checks direct adjacency only.
    let too_far = World::new([Clownfish, Tuna, Parrotfish]);
    assert_eq!(too_far.own_yield(0).unwrap(), Yields::wealth(2));
}

#[test]
fn barrier_dweller_counts_distinct_families_not_occurrences() {
    let crowd = World::new([Mackerel, Parrotfish, GreatMackerel, Mackerel]);
    let single = World::new([Mackerel, Parrotfish]);
    // Three mackerel of mixed tiers are still one kind of fish.
    assert_eq!(crowd.own_yield(1).unwrap(), single.own_yield(1).unwrap());
    assert_eq!(
        crowd.own_yield(1).unwrap(),
        Yields::wealth(3) + Yields::tech(1)
    );

    let mixed = World::new([Mackerel, Parrotfish, Seabass]);
    assert_eq!(
        mixed.own_yield(1).unwrap(),
        Yields::wealth(4) + Yields::tech(2)
    );
}

#[test]
fn predator_needs_prey_within_range() {
    let hungry = World::new([Seabass]);
    assert_eq!(hungry.own_yield(0).unwrap(), Yields::food(2));

    // Prey two tiles out is still within the animal range.
    let fed = World::new([Seabass, Tuna, Mackerel]);
    assert_eq!(fed.own_yield(0).unwrap(), Yields::food(5));
}

#[test]
fn growing_hunters_feed_on_neighbor_wealth() {
    // Clownfish wealth 2 -> (2 / 1) * 0.5 = 1 food, plus territorial +3.
    let world = World::new([Clownfish, Tuna]);
    assert_eq!(world.own_yield(1).unwrap(), Yields::food(8));
}

#[test]
fn growing_hunters_truncate_the_sum_before_the_fractional_multiply() {
    // GreatTuna: (2 / 1) * 0.75 = 1.5, truncated to 1 food.
    // Truncating before the multiply would give 0; not truncating at all, 2.
    let world = World::new([Clownfish, GreatTuna]);
    let tuna = world.own_yield(1).unwrap();
    // base 8 + hunters 1 + territorial 6
    assert_eq!(tuna, Yields::food(15));
}

#[test]
fn territorial_tuna_wants_no_rivals() {
    let lone = World::new([Tuna]);
    assert_eq!(lone.own_yield(0).unwrap(), Yields::food(7));

    let crowded = World::new([Tuna, Mackerel, Tuna]);
    assert_eq!(crowded.own_yield(0).unwrap(), Yields::food(4));
    assert_eq!(crowded.own_yield(2).unwrap(), Yields::food(4));
}

#[test]
fn marlin_specimens_scale_with_raw_neighbor_counts() {
    let world = World::new([Seabass, Marlin, Parrotfish]);
    let marlin = world.own_yield(1).unwrap();
    // base food 2, vigorous (food 4, tech 2) x1, huge (wealth 4, tech 2) x1
    assert_eq!(
        marlin,
        Yields {
            food: 6,
            wealth: 4,
            tech: 4,
            awe: 0,
            danger: 0,
        }
    );

    let double = World::new([Seabass, Marlin, Seabass]);
    assert_eq!(
        double.own_yield(1).unwrap(),
        Yields::food(2) + (Yields::food(4) + Yields::tech(2)) * 2
    );
}

#[test]
fn weird_deeps_turn_neighbor_food_into_tech() {
    // Mackerel food 2 -> 0.75 * (2 / 1) = 1.5, truncated to 1 tech.
    let world = World::new([Mackerel, Anglerfish]);
    assert_eq!(
        world.own_yield(1).unwrap(),
        Yields::wealth(6) + Yields::tech(1)
    );
}

#[test]
fn legendary_proportions_trigger_on_the_partial_yield() {
    // Two superior seabass contribute food 16: 0.75 * 16 = 12 tech >= 10.
    let world = World::new([SuperiorSeabass, Anglerfish, SuperiorSeabass]);
    assert_eq!(
        world.own_yield(1).unwrap(),
        Yields::wealth(6) + Yields::tech(12) + Yields::awe(5)
    );

    // Below the threshold no awe is granted.
    let quiet = World::new([Mackerel, Anglerfish]);
    assert_eq!(quiet.own_yield(1).unwrap().awe, 0);
}

#[test]
fn great_anglerfish_divides_food_per_two() {
    // food 16 -> (16 / 2) * 1.5 = 12 tech, legendary awe 8.
    let world = World::new([SuperiorSeabass, GreatAnglerfish, SuperiorSeabass]);
    assert_eq!(
        world.own_yield(1).unwrap(),
        Yields::wealth(12) + Yields::tech(12) + Yields::awe(8)
    );
}
