//! Collaborator contracts: a non-iterator stepper, and a guard stage which panics if any reducer is
//! stepped after it replied `Halt`.

use transducers::*;

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Passes inputs through unchanged, remembering whether the inner reducer has halted.
#[derive(Debug, Clone, Copy)]
struct Guard;

impl<R> Transducer<R> for Guard {
    type Output = Guarded<R>;

    fn apply(self, inner: R) -> Guarded<R> {
        Guarded(inner)
    }
}

struct Guarded<R>(R);

impl<R, Item> Reducer<Item> for Guarded<R>
where
    R: Reducer<Item>,
{
    type State = (bool, R::State);
    type Output = R::Output;

    fn initial(&self) -> Reply<Self::State> {
        let reply = self.0.initial();
        let halted = reply.is_halt();
        reply.map(|state| (halted, state))
    }

    fn step(&mut self, input: Item, (halted, state): Self::State) -> Reply<Self::State> {
        assert!(!halted, "reducer stepped after it replied halt");
        let reply = self.0.step(input, state);
        let halted = reply.is_halt();
        reply.map(|state| (halted, state))
    }

    fn finish(self, (_halted, state): Self::State) -> R::Output {
        self.0.finish(state)
    }
}

#[derive(Debug)]
enum Tree<T> {
    Leaf,
    Node(Box<Tree<T>>, T, Box<Tree<T>>),
}

impl<T> Tree<T> {
    fn node(left: Self, value: T, right: Self) -> Self {
        Self::Node(Box::new(left), value, Box::new(right))
    }

    fn single(value: T) -> Self {
        Self::node(Self::Leaf, value, Self::Leaf)
    }
}

/// In-order traversal of a [`Tree`].
struct InOrder;

fn walk<T, State, Step>(tree: Tree<T>, step: &mut Step, reply: Reply<State>) -> Reply<State>
where
    Step: FnMut(T, State) -> Reply<State>,
{
    match tree {
        Tree::Leaf => reply,
        Tree::Node(left, value, right) => match walk(*left, step, reply) {
            Reply::Continue(state) => match step(value, state) {
                Reply::Continue(state) => walk(*right, step, Reply::Continue(state)),
                halt @ Reply::Halt(_) => halt,
            },
            halt @ Reply::Halt(_) => halt,
        },
    }
}

impl<T> Stepper<Tree<T>> for InOrder {
    type Item = T;

    fn step_through<State, Step>(
        &self,
        mut step: Step,
        initial: Reply<State>,
        collection: Tree<T>,
    ) -> Reply<State>
    where
        Step: FnMut(T, State) -> Reply<State>,
    {
        walk(collection, &mut step, initial)
    }
}

fn sample_tree() -> Tree<i32> {
    Tree::node(
        Tree::node(Tree::single(1), 2, Tree::single(3)),
        4,
        Tree::node(Tree::Leaf, 5, Tree::node(Tree::single(6), 7, Tree::Leaf)),
    )
}

#[test]
fn test_tree_in_order() {
    init_tracing();

    let r = expect_sequence([1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(Ok(()), reduce(InOrder, r, sample_tree()));
}

#[test]
fn test_tree_same_pipeline_as_list() {
    init_tracing();

    let pipeline = || compose!(filter(|x: &i32| x % 2 == 1), with_index::<i32>(), take(3));
    let expected = [(0, 1), (1, 3), (2, 5)];

    let r = apply(pipeline(), expect_sequence(expected));
    assert_eq!(Ok(()), reduce(InOrder, r, sample_tree()));

    let r = apply(pipeline(), expect_sequence(expected));
    assert_eq!(Ok(()), reduce(IterStepper, r, 1..=7));
}

#[test]
fn test_tree_halts_mid_traversal() {
    init_tracing();

    assert!(reduce(InOrder, member(3), sample_tree()));
    assert!(!reduce(InOrder, member(8), sample_tree()));
    assert!(reduce(InOrder, is_empty(), Tree::<u8>::Leaf));
}

#[test]
fn test_no_stage_steps_after_halt() {
    init_tracing();

    // Guards around every stage, and between the stepper and the outermost stage.
    let pipeline = compose!(
        Guard,
        take(5),
        Guard,
        with_index::<i32>(),
        Guard,
        skip(1),
        Guard,
        take(2),
        Guard,
    );
    let r = apply(pipeline, collect::<Vec<(usize, i32)>>());
    assert_eq!(vec![(1, 11), (2, 12)], reduce_iter(r, 10..));

    // The terminal halts first here, before either take runs out.
    let pipeline = compose!(Guard, take(10), Guard, map(|x: i32| x * 2), Guard);
    let r = apply(pipeline, member(6));
    assert!(reduce(InOrder, r, sample_tree()));
}

#[test]
fn test_guards_see_initial_halt() {
    init_tracing();

    let pipeline = compose!(Guard, take(0), Guard, take(3), Guard);
    let r = apply(pipeline, length());
    assert_eq!(0, reduce_iter(r, 0..));
    assert_eq!(0, reduce(InOrder, apply(take(-1), length()), sample_tree()));
}
