use super::arrow::FinFunction;
use crate::category::{Arrow, Cospan, HasPullbacks, HasPushouts, Span};

impl HasPullbacks for FinFunction {
    /// Wide pullback by matching fibers: a point of the apex is a tuple
    /// `(p₀, …, pₙ)` with every `fᵢ(pᵢ)` equal, and leg `i` reads the
    /// `i`-th coordinate back off each tuple.
    fn pullback(cospan: &[Self]) -> Option<Span<Self>> {
        let target = cospan.first()?.target;
        if cospan.iter().any(|f| f.target != target) {
            return None;
        }

        // Bucket each function's source by the value it maps to.
        let mut fibers: Vec<Vec<Vec<usize>>> = vec![vec![Vec::new(); target]; cospan.len()];
        for (i, f) in cospan.iter().enumerate() {
            for (p, &value) in f.table.iter().enumerate() {
                fibers[i][value].push(p);
            }
        }

        let mut apex = 0;
        let mut legs: Vec<Vec<usize>> = vec![Vec::new(); cospan.len()];
        for value in 0..target {
            // Tuples over this fiber: the cartesian product of every
            // function's preimage of `value`.
            let mut tuples: Vec<Vec<usize>> = vec![Vec::new()];
            for i in 0..cospan.len() {
                let mut extended = Vec::new();
                for tuple in &tuples {
                    for &p in &fibers[i][value] {
                        let mut longer = tuple.clone();
                        longer.push(p);
                        extended.push(longer);
                    }
                }
                tuples = extended;
            }

            for tuple in tuples {
                for (leg, &p) in legs.iter_mut().zip(&tuple) {
                    leg.push(p);
                }
                apex += 1;
            }
        }

        let legs = legs
            .into_iter()
            .zip(cospan)
            .map(|(table, f)| FinFunction {
                table,
                target: f.source(),
            })
            .collect();

        Some(Span { apex, legs })
    }
}

impl HasPushouts for FinFunction {
    /// Wide pushout by quotienting the disjoint union `Σᵢ Pᵢ` of the legs'
    /// targets: for each point of the apex, the images under all legs are
    /// identified. Classes are numbered in first-occurrence order so the
    /// result is deterministic.
    fn pushout(span: &Span<Self>) -> Option<Cospan<Self>> {
        if span.legs.is_empty() {
            return None;
        }
        if span.legs.iter().any(|leg| leg.source() != span.apex) {
            return None;
        }

        let mut offsets = Vec::with_capacity(span.legs.len());
        let mut total = 0;
        for leg in &span.legs {
            offsets.push(total);
            total += leg.target;
        }

        let mut classes = UnionFind::new(total);
        for l in 0..span.apex {
            let anchor = offsets[0] + span.legs[0].table[l];
            for (i, leg) in span.legs.iter().enumerate().skip(1) {
                classes.union(anchor, offsets[i] + leg.table[l]);
            }
        }

        let mut class_index = vec![usize::MAX; total];
        let mut quotient = Vec::with_capacity(total);
        let mut coapex = 0;
        for v in 0..total {
            let root = classes.find(v);
            if class_index[root] == usize::MAX {
                class_index[root] = coapex;
                coapex += 1;
            }
            quotient.push(class_index[root]);
        }

        let legs = span
            .legs
            .iter()
            .zip(&offsets)
            .map(|(leg, offset)| FinFunction {
                table: (0..leg.target).map(|p| quotient[offset + p]).collect(),
                target: coapex,
            })
            .collect();

        Some(Cospan { coapex, legs })
    }

    /// The mediating morphism out of a pushout, by scattering the family
    /// through the injections. A conflicting assignment or an unassigned
    /// point of the coapex means the family does not commute with the
    /// injections, so no mediator exists.
    fn copair(cospan: &Cospan<Self>, family: &[Self]) -> Option<Self> {
        if family.len() != cospan.legs.len() {
            return None;
        }
        let target = family.first()?.target;
        if family.iter().any(|f| f.target != target) {
            return None;
        }

        let mut table: Vec<Option<usize>> = vec![None; cospan.coapex];
        for (leg, f) in cospan.legs.iter().zip(family) {
            if leg.source() != f.source() || leg.target != cospan.coapex {
                return None;
            }
            for (p, &q) in leg.table.iter().enumerate() {
                match table[q] {
                    None => table[q] = Some(f.table[p]),
                    Some(assigned) if assigned == f.table[p] => {}
                    Some(_) => return None,
                }
            }
        }

        let table: Vec<usize> = table.into_iter().collect::<Option<_>>()?;
        Some(Self { table, target })
    }
}

// Union-find over the disjoint union of a span's feet.
struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut node = x;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }

        let (root, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.parent[root] = parent;
        self.size[parent] += self.size[root];
    }
}
