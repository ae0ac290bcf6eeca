use super::*;

/// Edge probability can be given directly or as average degree, which is more common in practice
#[derive(Debug, Copy, Clone, Default)]
enum EdgeProb {
    #[default]
    NotSet,
    Prob(f64),
    AvgDeg(f64),
}

/// `G(n,p)`-style friendship graphs: every pair of persons is friends with probability `p`,
/// independently of all other pairs. Each person is a student with probability
/// `student_prob`, attending a school drawn uniformly from `schools`.
///
/// Persons are called `p0, p1, ...` in index order.
#[derive(Debug, Clone, Default)]
pub struct RandomFriendships {
    n: NumNodes,
    p: EdgeProb,
    schools: Vec<String>,
    student_prob: f64,
}

fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

impl RandomFriendships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of persons
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(is_valid_probability(prob));
        self.p = EdgeProb::Prob(prob);
        self
    }

    /// Updates `p` such that `p = d/(n - 1)`.
    /// The conversion is done when calling `generate`.
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.p = EdgeProb::AvgDeg(deg);
        self
    }

    /// Updates the schools students are drawn from
    pub fn schools<I, S>(mut self, schools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schools = schools.into_iter().map(Into::into).collect();
        self
    }

    /// Updates the probability of a person being a student
    pub fn student_prob(mut self, prob: f64) -> Self {
        assert!(is_valid_probability(prob));
        self.student_prob = prob;
        self
    }

    fn edge_prob(&self) -> f64 {
        match self.p {
            EdgeProb::NotSet => panic!("Edge probability of RandomFriendships was not set!"),
            EdgeProb::Prob(p) => p,
            EdgeProb::AvgDeg(d) => {
                let p = if self.n > 1 {
                    d / (self.n - 1) as f64
                } else {
                    0.0
                };
                assert!(
                    is_valid_probability(p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }

    /// Generates a random friendship graph
    pub fn generate<R: Rng>(&self, rng: &mut R) -> FriendGraph {
        let p = self.edge_prob();
        let mut builder = FriendGraphBuilder::with_capacity(self.n as usize);

        for u in 0..self.n {
            let name = format!("p{u}");
            let school = (!self.schools.is_empty() && rng.random_bool(self.student_prob))
                .then(|| self.schools[rng.random_range(0..self.schools.len())].as_str());

            builder
                .add_person(&name, school)
                .expect("generated names are unique and non-empty");
        }

        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if rng.random_bool(p) {
                    builder.add_friendship_between(u, v);
                }
            }
        }

        builder.build()
    }
}
