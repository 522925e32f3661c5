use observer::{InstanceCounter, NameStrategy, NotifyError, Observable, Observer};

struct NewValueSubscriber {
    name: String,
}

impl NewValueSubscriber {
    fn new(names: &mut InstanceCounter) -> Self {
        return Self {
            name: names.next_for::<Self>(),
        };
    }
}

impl Observer<i32> for NewValueSubscriber {
    fn name(&self) -> &str {
        return &self.name;
    }

    fn update(&self, value: &i32) -> anyhow::Result<()> {
        println!("{} received new value: {}", self.name, value);
        return Ok(());
    }
}

struct NewValuePublisher<'a> {
    observable: Observable<'a, i32>,
    value: i32,
}

impl<'a> NewValuePublisher<'a> {
    fn new(names: &mut dyn NameStrategy) -> Self {
        return Self {
            observable: Observable::for_owner::<Self>(names),
            value: 0,
        };
    }

    fn value(&self) -> i32 {
        return self.value;
    }

    fn set_value(&mut self, value: i32) -> Result<(), NotifyError> {
        self.value = value;
        println!("{} updating new value: {} to observers", self.observable.name(), value);

        return self.observable.notify(&self.value);
    }
}

fn main() -> anyhow::Result<()> {
    let mut names = InstanceCounter::new();

    let first = NewValueSubscriber::new(&mut names);
    let second = NewValueSubscriber::new(&mut names);
    let mut publisher = NewValuePublisher::new(&mut names);

    publisher.observable.attach(&first);
    publisher.observable.attach(&first);
    publisher.observable.attach(&second);
    publisher.set_value(5)?;

    publisher.observable.detach(&first);
    publisher.set_value(6)?;

    publisher.observable.detach(&second);
    publisher.set_value(7)?;

    println!("{} final value: {}", publisher.observable.name(), publisher.value());

    return Ok(());
}
