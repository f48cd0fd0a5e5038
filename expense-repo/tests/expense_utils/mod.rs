use fake::faker::lorem::en::{Sentence, Words};
use fake::{Fake, Faker};
use expense_repo::expense_repo::NewExpense;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeTitle;

impl Generator<String> for FakeTitle {
    fn gen(&mut self) -> String {
        Sentence(1..4).fake()
    }
}

struct FakeAmount;

impl Generator<Decimal> for FakeAmount {
    fn gen(&mut self) -> Decimal {
        Decimal::new(Faker.fake::<i32>() as i64, 2)
    }
}

struct FakeTags;

impl Generator<Vec<String>> for FakeTags {
    fn gen(&mut self) -> Vec<String> {
        Words(0..4).fake()
    }
}

struct NewExpenseGenerator {
    title: Box<dyn Generator<String>>,
    amount: Box<dyn Generator<Decimal>>,
    note: Box<dyn Generator<Option<String>>>,
    tags: Box<dyn Generator<Vec<String>>>,
}

impl NewExpenseGenerator {
    fn new() -> Self {
        NewExpenseGenerator {
            title: Box::new(FakeTitle),
            amount: Box::new(FakeAmount),
            note: RandomSample::boxed(vec![
                None,
                Some("paid in cash".to_string()),
                Some("split with a friend".to_string()),
            ]),
            tags: Box::new(FakeTags),
        }
    }

    fn gen(&mut self) -> NewExpense {
        NewExpense::new(
            self.title.gen(),
            self.amount.gen(),
            self.note.gen(),
            self.tags.gen(),
        )
    }
}

pub fn generate_new_expense() -> NewExpense {
    NewExpenseGenerator::new().gen()
}

pub fn generate_new_expenses(count: usize) -> Vec<NewExpense> {
    let mut generator = NewExpenseGenerator::new();
    (0..count).map(|_| generator.gen()).collect()
}

pub fn generate_new_expense_with_tags(tags: Vec<String>) -> NewExpense {
    NewExpense {
        tags,
        ..generate_new_expense()
    }
}
