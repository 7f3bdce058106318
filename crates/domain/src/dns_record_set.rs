use std::net::IpAddr;

/// Ordered addresses returned for one hostname.
///
/// An empty set is a successful lookup with no addresses, which callers
/// report differently from a name that does not resolve at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsRecordSet {
    addresses: Vec<IpAddr>,
}

impl DnsRecordSet {
    pub fn new(addresses: Vec<IpAddr>) -> Self {
        let mut unique = Vec::with_capacity(addresses.len());
        for addr in addresses {
            if !unique.contains(&addr) {
                unique.push(addr);
            }
        }
        Self { addresses: unique }
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn first(&self) -> Option<IpAddr> {
        self.addresses.first().copied()
    }

    /// First IPv4 address, falling back to the first address of any family.
    pub fn preferred(&self) -> Option<IpAddr> {
        self.addresses
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| self.addresses.first())
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IpAddr> {
        self.addresses.iter()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.addresses.iter().map(|addr| addr.to_string()).collect()
    }
}

impl FromIterator<IpAddr> for DnsRecordSet {
    fn from_iter<T: IntoIterator<Item = IpAddr>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
