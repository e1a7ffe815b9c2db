use crate::{Individual, Pedigree, Sex};

/// Mock an individual without any relative.
/// # Arguments:
/// - `id`      : raw string slice defining the individual's identifier (e.g. "father", "I3", etc.)
/// - `sex`     : sex of the individual.
/// - `affected`: affected status of the individual.
pub fn mock_individual(id: &str, sex: Sex, affected: bool) -> Individual {
    Individual::new(id, sex)
        .expect("Mock individuals should carry a valid identifier")
        .with_status(affected)
}

/// Mock a pedigree from a table of members and a list of `(child, parent)` links.
pub fn mock_pedigree(members: &[(&str, Sex, bool)], links: &[(&str, &str)]) -> Pedigree {
    let individuals = members.iter().map(|(id, sex, affected)| mock_individual(id, *sex, *affected));
    let mut pedigree = Pedigree::from_individuals(individuals).expect("Mock members should be unique");
    for (child, parent) in links {
        pedigree.set_relationship(child, parent).expect("Mock links should point to members");
    }
    pedigree
}

/// Mock a "mother", "father" and "child" trio.
/// # Arguments:
/// - `child_sex`: sex of the child.
/// - `affected` : affected status of the child, the mother and the father, in that order.
pub fn mock_trio_pedigree(child_sex: Sex, affected: [bool; 3]) -> Pedigree {
    mock_pedigree(
        &[("mother", Sex::Female, affected[1]), ("father", Sex::Male, affected[2]), ("child", child_sex, affected[0])],
        &[("child", "mother"), ("child", "father")]
    )
}

/// Mock a small three-generation pedigree:
/// ```text
/// I1 (M) x I2 (F)
///        |
///     I3 (F)   x   I4 (M)
///              |
///           I5 (M, affected)
/// ```
pub fn three_generations() -> Pedigree {
    mock_pedigree(
        &[
            ("I1", Sex::Male, false), ("I2", Sex::Female, false), ("I3", Sex::Female, false),
            ("I4", Sex::Male, false), ("I5", Sex::Male, true),
        ],
        &[("I3", "I1"), ("I3", "I2"), ("I5", "I3"), ("I5", "I4")]
    )
}

/// Mock a random, structurally valid pedigree of `n` individuals. Each individual may only pick its
/// parents among the individuals created before it, which keeps the lineage acyclic.
pub fn random_pedigree(rng: &mut fastrand::Rng, n: usize) -> Pedigree {
    let members: Vec<(String, Sex)> = (0..n)
        .map(|i| (format!("I{i}"), if rng.bool() { Sex::Male } else { Sex::Female }))
        .collect();

    let mut pedigree = Pedigree::from_individuals(
        members.iter().map(|(id, sex)| mock_individual(id, *sex, rng.bool()))
    ).expect("Random members should be unique");

    for (i, (child, _)) in members.iter().enumerate().skip(1) {
        for _ in 0..rng.usize(0..=2) {
            let (parent, _) = &members[rng.usize(0..i)];
            pedigree.set_relationship(child, parent).expect("Random links should point to members");
        }
    }
    pedigree
}
