use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::containers::HashMap;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;
use crate::engine::DomainEvents;

#[derive(Clone, Debug)]
pub(crate) struct AllDifferentDomainConstructor<Var> {
    pub(crate) vars: Box<[Var]>,
}

/// Domain consistent propagator for the all-different constraint.
///
/// A maximum matching between variables and values is computed; if it does not cover every
/// variable the constraint is violated. Otherwise an edge `(x, v)` belongs to some maximum
/// matching if and only if it is matched, or both endpoints lie in the same strongly connected
/// component of the residual graph. All other values are removed.
#[derive(Debug)]
pub(crate) struct AllDifferentDomainPropagator<Var> {
    vars: Box<[Var]>,
}

impl<Var> PropagatorConstructor for AllDifferentDomainConstructor<Var>
where
    Var: IntegerVariable,
{
    type PropagatorImpl = AllDifferentDomainPropagator<Var>;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        let vars: Box<[_]> = self
            .vars
            .iter()
            .map(|var| context.register(var.clone(), DomainEvents::ANY_INT))
            .collect();
        AllDifferentDomainPropagator { vars }
    }
}

impl<Var> Propagator for AllDifferentDomainPropagator<Var>
where
    Var: IntegerVariable,
{
    fn priority(&self) -> Priority {
        Priority::VeryLow
    }

    fn name(&self) -> &str {
        "AllDifferentDomain"
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let graph = ValueGraph::new(&self.vars, &context);

        let matching = graph.maximum_matching();
        if matching.iter().any(Option::is_none) {
            return Err(Inconsistency::Conflict);
        }
        let matching: Vec<usize> = matching.into_iter().flatten().collect();

        let components = graph.residual_components(&matching);

        for (var_index, var) in self.vars.iter().enumerate() {
            for &value_index in graph.edges[var_index].iter() {
                if value_index == matching[var_index] {
                    continue;
                }
                if components[var_index] != components[graph.value_node(value_index)] {
                    let _ = context.remove(var, graph.values[value_index])?;
                }
            }
        }

        Ok(())
    }
}

/// The bipartite graph between variables and the values in their domains.
///
/// Variables are numbered `0..n`, values `0..m`; in the residual graph values are shifted to
/// nodes `n..n + m` and node `n + m` is the sink.
#[derive(Debug)]
struct ValueGraph {
    values: Vec<i32>,
    edges: Vec<Vec<usize>>,
}

impl ValueGraph {
    fn new<Var: IntegerVariable>(vars: &[Var], context: &PropagationContextMut) -> ValueGraph {
        let mut values = Vec::new();
        let mut value_indices: HashMap<i32, usize> = HashMap::default();

        let edges: Vec<Vec<usize>> = vars
            .iter()
            .map(|var| {
                context
                    .iterate_domain(var)
                    .map(|value| {
                        *value_indices.entry(value).or_insert_with(|| {
                            values.push(value);
                            values.len() - 1
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        ValueGraph { values, edges }
    }

    fn num_vars(&self) -> usize {
        self.edges.len()
    }

    fn value_node(&self, value_index: usize) -> usize {
        self.num_vars() + value_index
    }

    fn sink(&self) -> usize {
        self.num_vars() + self.values.len()
    }

    /// Computes a maximum matching with augmenting paths; entry `i` holds the value index
    /// matched to variable `i`.
    fn maximum_matching(&self) -> Vec<Option<usize>> {
        let mut var_of_value: Vec<Option<usize>> = vec![None; self.values.len()];

        for var_index in 0..self.num_vars() {
            let mut visited = vec![false; self.values.len()];
            let _ = self.augment(var_index, &mut visited, &mut var_of_value);
        }

        let mut value_of_var = vec![None; self.num_vars()];
        for (value_index, var_index) in var_of_value.iter().enumerate() {
            if let Some(var_index) = var_index {
                value_of_var[*var_index] = Some(value_index);
            }
        }
        value_of_var
    }

    fn augment(
        &self,
        var_index: usize,
        visited: &mut [bool],
        var_of_value: &mut [Option<usize>],
    ) -> bool {
        for &value_index in self.edges[var_index].iter() {
            if visited[value_index] {
                continue;
            }
            visited[value_index] = true;

            let can_take = match var_of_value[value_index] {
                None => true,
                Some(other) => self.augment(other, visited, var_of_value),
            };
            if can_take {
                var_of_value[value_index] = Some(var_index);
                return true;
            }
        }
        false
    }

    /// Labels every node of the residual graph with its strongly connected component.
    ///
    /// The residual graph orients matched edges from variable to value and unmatched edges from
    /// value to variable. Matched values point to the sink, and the sink points to every free
    /// value, which closes the even alternating paths starting in a free value into cycles.
    fn residual_components(&self, matching: &[usize]) -> Vec<usize> {
        let num_nodes = self.sink() + 1;
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];
        let mut is_matched = vec![false; self.values.len()];

        for (var_index, value_indices) in self.edges.iter().enumerate() {
            for &value_index in value_indices.iter() {
                if matching[var_index] == value_index {
                    successors[var_index].push(self.value_node(value_index));
                    is_matched[value_index] = true;
                } else {
                    successors[self.value_node(value_index)].push(var_index);
                }
            }
        }

        for (value_index, matched) in is_matched.iter().enumerate() {
            if *matched {
                successors[self.value_node(value_index)].push(self.sink());
            } else {
                successors[self.sink()].push(self.value_node(value_index));
            }
        }

        Tarjan::new(&successors).components()
    }
}

/// Tarjan's strongly connected components algorithm.
#[derive(Debug)]
struct Tarjan<'a> {
    successors: &'a [Vec<usize>],
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    component: Vec<usize>,
    next_index: usize,
    num_components: usize,
}

impl<'a> Tarjan<'a> {
    fn new(successors: &'a [Vec<usize>]) -> Self {
        let num_nodes = successors.len();
        Tarjan {
            successors,
            index: vec![None; num_nodes],
            low_link: vec![0; num_nodes],
            on_stack: vec![false; num_nodes],
            stack: Vec::new(),
            component: vec![0; num_nodes],
            next_index: 0,
            num_components: 0,
        }
    }

    fn components(mut self) -> Vec<usize> {
        for node in 0..self.successors.len() {
            if self.index[node].is_none() {
                self.visit(node);
            }
        }
        self.component
    }

    fn visit(&mut self, node: usize) {
        self.index[node] = Some(self.next_index);
        self.low_link[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;

        for &successor in self.successors[node].iter() {
            match self.index[successor] {
                None => {
                    self.visit(successor);
                    self.low_link[node] = self.low_link[node].min(self.low_link[successor]);
                }
                Some(successor_index) if self.on_stack[successor] => {
                    self.low_link[node] = self.low_link[node].min(successor_index);
                }
                Some(_) => {}
            }
        }

        if Some(self.low_link[node]) == self.index[node] {
            while let Some(member) = self.stack.pop() {
                self.on_stack[member] = false;
                self.component[member] = self.num_components;
                if member == node {
                    break;
                }
            }
            self.num_components += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::TestSolver;

    #[test]
    fn values_outside_every_maximum_matching_are_removed() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 2);
        let b = solver.new_variable(1, 2);
        let c = solver.new_variable(1, 3);

        let _ = solver
            .new_propagator(AllDifferentDomainConstructor {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");

        assert_eq!(vec![1, 2], solver.domain(a));
        assert_eq!(vec![1, 2], solver.domain(b));
        assert_eq!(vec![3], solver.domain(c));
    }

    #[test]
    fn holes_are_taken_into_account() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 3);
        let b = solver.new_variable(1, 3);
        let c = solver.new_variable(1, 5);
        solver.remove(a, 2).expect("non-empty domain");
        solver.remove(b, 2).expect("non-empty domain");

        let _ = solver
            .new_propagator(AllDifferentDomainConstructor {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");

        assert_eq!(vec![2, 4, 5], solver.domain(c));
    }

    #[test]
    fn free_values_keep_alternatives_alive() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 3);
        let b = solver.new_variable(1, 3);

        let propagator = solver
            .new_propagator(AllDifferentDomainConstructor {
                vars: [a, b].into(),
            })
            .expect("no empty domains");

        assert_eq!(vec![1, 2, 3], solver.domain(a));
        assert_eq!(vec![1, 2, 3], solver.domain(b));
        assert_eq!(Ok(false), solver.propagate_and_check_change(&propagator));
    }

    #[test]
    fn missing_matching_is_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 3);
        let b = solver.new_variable(1, 3);
        let c = solver.new_variable(1, 3);
        let d = solver.new_variable(1, 5);
        solver.remove(d, 4).expect("non-empty domain");
        solver.remove(d, 5).expect("non-empty domain");

        let result = solver.new_propagator(AllDifferentDomainConstructor {
            vars: [a, b, c, d].into(),
        });

        assert_eq!(Some(Inconsistency::Conflict), result.err());
    }
}
