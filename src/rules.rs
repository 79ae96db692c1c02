//! Mamdani rule tables over pairs of fuzzified variables.
//!
//! A rule fires with the min of its antecedent degrees; every consequent takes
//! the max over the rules that name it, or zero when no rule does.

use crate::error::Result;
use crate::ops;
use crate::terms::{Memberships, Term};
use crate::variables::{Application, Assets, Credit, House, InterestRate, Location, MarketValue, Salary};

use Premise::{Both, Left, Right};

/// Antecedent of a rule over a left and a right variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Premise<L, R> {
    Left(L),
    Right(R),
    /// Both hold (AND = min)
    Both(L, R),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule<L, R, O> {
    pub premise: Premise<L, R>,
    pub consequence: O,
}

impl<L, R, O> Rule<L, R, O> {
    pub const fn new(premise: Premise<L, R>, consequence: O) -> Self {
        Rule { premise, consequence }
    }
}

impl<L: Term, R: Term, O: Term> Rule<L, R, O> {
    /// Firing strength of the premise. A category missing from either
    /// mapping is an error, never a zero.
    pub fn strength(&self, left: &Memberships<L>, right: &Memberships<R>) -> Result<f64> {
        Ok(match self.premise {
            Premise::Left(l) => left.get(l)?,
            Premise::Right(r) => right.get(r)?,
            Premise::Both(l, r) => ops::and(left.get(l)?, right.get(r)?),
        })
    }
}

/// A fixed rule table.
#[derive(Clone, Copy, Debug)]
pub struct RuleSet<L: 'static, R: 'static, O: 'static>(&'static [Rule<L, R, O>]);

impl<L: 'static, R: 'static, O: 'static> RuleSet<L, R, O> {
    pub const fn new(rules: &'static [Rule<L, R, O>]) -> Self {
        RuleSet(rules)
    }

    pub fn rules(&self) -> &'static [Rule<L, R, O>] {
        self.0
    }
}

impl<L: Term, R: Term, O: Term> RuleSet<L, R, O> {
    pub fn eval(&self, left: &Memberships<L>, right: &Memberships<R>) -> Result<Memberships<O>> {
        let mut output = Memberships::zero();

        for rule in self.0 {
            output.raise(rule.consequence, rule.strength(left, right)?)?;
        }

        Ok(output)
    }
}

/// House desirability from market value and location.
///
/// The unary rules overlap the pairwise ones on `Low`; both are kept since they
/// change the max.
pub const HOUSE_RULES: RuleSet<MarketValue, Location, House> = {
    use Location as L;
    use MarketValue as M;

    RuleSet::new(&[
        Rule::new(Left(M::Low), House::Low),
        Rule::new(Right(L::Bad), House::Low),
        Rule::new(Both(M::Low, L::Bad), House::VeryLow),
        Rule::new(Both(M::Medium, L::Bad), House::Low),
        Rule::new(Both(M::High, L::Bad), House::Medium),
        Rule::new(Both(M::VeryHigh, L::Bad), House::High),
        Rule::new(Both(M::Low, L::Fair), House::Low),
        Rule::new(Both(M::Medium, L::Fair), House::Medium),
        Rule::new(Both(M::High, L::Fair), House::High),
        Rule::new(Both(M::VeryHigh, L::Fair), House::VeryHigh),
        Rule::new(Both(M::Low, L::Excellent), House::Medium),
        Rule::new(Both(M::Medium, L::Excellent), House::High),
        Rule::new(Both(M::High, L::Excellent), House::VeryHigh),
        Rule::new(Both(M::VeryHigh, L::Excellent), House::VeryHigh),
    ])
};

/// Applicant strength from assets and salary, the full cross product.
pub const APPLICATION_RULES: RuleSet<Assets, Salary, Application> = {
    use Application as P;
    use Assets as A;
    use Salary as S;

    RuleSet::new(&[
        Rule::new(Both(A::Low, S::Low), P::Low),
        Rule::new(Both(A::Low, S::Medium), P::Low),
        Rule::new(Both(A::Low, S::High), P::Medium),
        Rule::new(Both(A::Low, S::VeryHigh), P::High),
        Rule::new(Both(A::Medium, S::Low), P::Low),
        Rule::new(Both(A::Medium, S::Medium), P::Medium),
        Rule::new(Both(A::Medium, S::High), P::High),
        Rule::new(Both(A::Medium, S::VeryHigh), P::High),
        Rule::new(Both(A::High, S::Low), P::Medium),
        Rule::new(Both(A::High, S::Medium), P::Medium),
        Rule::new(Both(A::High, S::High), P::High),
        Rule::new(Both(A::High, S::VeryHigh), P::High),
    ])
};

/// Credit rules over the loan terms: salary and interest rate.
pub const LOAN_TERMS_RULES: RuleSet<Salary, InterestRate, Credit> = {
    use InterestRate as I;
    use Salary as S;

    RuleSet::new(&[
        Rule::new(Both(S::Low, I::Medium), Credit::VeryLow),
        Rule::new(Both(S::Low, I::High), Credit::VeryLow),
        Rule::new(Both(S::Medium, I::High), Credit::Low),
    ])
};

/// Credit rules over the applicant and house rule outputs.
pub const LOAN_PROFILE_RULES: RuleSet<Application, House, Credit> = {
    use Application as P;
    use House as H;

    RuleSet::new(&[
        Rule::new(Left(P::Low), Credit::VeryLow),
        Rule::new(Right(H::VeryLow), Credit::VeryLow),
        Rule::new(Both(P::Medium, H::VeryLow), Credit::Low),
        Rule::new(Both(P::Medium, H::Low), Credit::Low),
        Rule::new(Both(P::Medium, H::Medium), Credit::Medium),
        Rule::new(Both(P::Medium, H::High), Credit::High),
        Rule::new(Both(P::Medium, H::VeryHigh), Credit::High),
        Rule::new(Both(P::High, H::VeryLow), Credit::Low),
        Rule::new(Both(P::High, H::Low), Credit::Medium),
        Rule::new(Both(P::High, H::Medium), Credit::High),
        Rule::new(Both(P::High, H::High), Credit::High),
        Rule::new(Both(P::High, H::VeryHigh), Credit::VeryHigh),
    ])
};

#[test]
fn test_rule_counts() {
    assert_eq!(HOUSE_RULES.rules().len(), 14);
    assert_eq!(APPLICATION_RULES.rules().len(), 12);
    assert_eq!(LOAN_TERMS_RULES.rules().len() + LOAN_PROFILE_RULES.rules().len(), 15);
}

#[test]
fn test_rule_strength() {
    let market = Memberships::<MarketValue>::from_named([
        ("Low", 0.8),
        ("Medium", 0.2),
        ("High", 0.),
        ("Very High", 0.),
    ])
    .unwrap();
    let location = Memberships::<Location>::from_named([("Bad", 0.1), ("Fair", 0.5), ("Excellent", 0.4)]).unwrap();

    let unary_left = Rule::new(Left(MarketValue::Low), House::Low);
    let unary_right = Rule::new(Right(Location::Excellent), House::High);
    let both = Rule::new(Both(MarketValue::Low, Location::Fair), House::Low);

    assert_eq!(unary_left.strength(&market, &location), Ok(0.8));
    assert_eq!(unary_right.strength(&market, &location), Ok(0.4));
    assert_eq!(both.strength(&market, &location), Ok(0.5));
}

#[test]
fn test_every_consequent_is_reachable() {
    fn consequents<L, R, O: Term>(set: RuleSet<L, R, O>) -> Vec<O> {
        set.rules().iter().map(|rule| rule.consequence).collect()
    }

    for term in House::ALL {
        assert!(consequents(HOUSE_RULES).contains(term), "{term:?}");
    }

    for term in Application::ALL {
        assert!(consequents(APPLICATION_RULES).contains(term), "{term:?}");
    }

    for term in Credit::ALL {
        let fired_by_terms = consequents(LOAN_TERMS_RULES).contains(term);
        let fired_by_profile = consequents(LOAN_PROFILE_RULES).contains(term);

        assert!(fired_by_terms || fired_by_profile, "{term:?}");
    }
}

#[test]
fn test_unfired_consequent_defaults_to_zero() {
    const ONLY_HIGH: RuleSet<Salary, InterestRate, Credit> =
        RuleSet::new(&[Rule::new(Both(Salary::High, InterestRate::Low), Credit::High)]);

    let salary = Memberships::from_fn(|_| 1.);
    let interest = Memberships::from_fn(|_| 1.);
    let credit = ONLY_HIGH.eval(&salary, &interest).unwrap();

    assert_eq!(credit.named(), vec![
        ("Very_low", 0.),
        ("Low", 0.),
        ("Medium", 0.),
        ("High", 1.),
        ("Very_high", 0.)
    ]);
}
